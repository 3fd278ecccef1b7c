// src/api/handlers/breach.rs

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use log::error;

use crate::core::service::{PasswordService, ServiceError};
use crate::api::types::{
    BatchBreachRequest, BatchBreachResponse, BreachCheckRequest, BreachCheckResponse,
};

fn breach_error_message(e: &ServiceError) -> String {
    match e {
        ServiceError::Breach(breach) => breach.user_message().to_string(),
        other => other.to_string(),
    }
}

/// Check one password against the breach corpus
///
/// Uses the k-anonymity range protocol: only the first 5 characters of
/// the SHA-1 digest are sent to the remote service.
#[utoipa::path(
    post,
    path = "/breach/check",
    tag = "Breach",
    request_body = BreachCheckRequest,
    responses(
        (status = 200, description = "Check result", body = BreachCheckResponse),
        (status = 502, description = "Breach service failure", body = BreachCheckResponse)
    )
)]
pub async fn check_password(
    service: web::Data<Arc<PasswordService>>,
    request: web::Json<BreachCheckRequest>,
) -> impl Responder {
    match service.check_breach(&request.password).await {
        Ok(result) => HttpResponse::Ok().json(BreachCheckResponse {
            success: true,
            result: Some(result),
            error: None,
        }),
        Err(e) => {
            error!("Breach check failed: {}", e);
            HttpResponse::BadGateway().json(BreachCheckResponse {
                success: false,
                result: None,
                error: Some(breach_error_message(&e)),
            })
        }
    }
}

/// Check a batch of passwords
///
/// Sequential checks with a fixed inter-request delay. A failed item
/// reports the whole batch with an `error` status.
#[utoipa::path(
    post,
    path = "/breach/check-batch",
    tag = "Breach",
    request_body = BatchBreachRequest,
    responses(
        (status = 200, description = "Batch summary", body = BatchBreachResponse)
    )
)]
pub async fn check_batch(
    service: web::Data<Arc<PasswordService>>,
    request: web::Json<BatchBreachRequest>,
) -> impl Responder {
    let summary = service.check_breach_batch(&request.passwords).await;
    HttpResponse::Ok().json(BatchBreachResponse {
        success: true,
        summary: Some(summary),
        error: None,
    })
}
