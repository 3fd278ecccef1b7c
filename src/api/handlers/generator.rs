// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use log::{debug, error};

use crate::core::service::PasswordService;
use crate::models::GenerationOptions;
use crate::api::types::{GenerateRequest, GenerateResponse};

/// Generate one or more passwords
///
/// Generates passwords from the provided options, records them in the
/// history, and optionally checks them against the breach corpus.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated passwords", body = GenerateResponse),
        (status = 400, description = "Invalid options", body = GenerateResponse),
        (status = 500, description = "Server error", body = GenerateResponse)
    )
)]
pub async fn generate_password(
    service: web::Data<Arc<PasswordService>>,
    request: web::Json<GenerateRequest>,
) -> impl Responder {
    debug!("Generate request: {:?}", request);

    let defaults = GenerationOptions::default();
    let options = GenerationOptions {
        length: request.length.unwrap_or(defaults.length),
        include_uppercase: request.include_uppercase.unwrap_or(defaults.include_uppercase),
        include_lowercase: request.include_lowercase.unwrap_or(defaults.include_lowercase),
        include_numbers: request.include_numbers.unwrap_or(defaults.include_numbers),
        include_symbols: request.include_symbols.unwrap_or(defaults.include_symbols),
        pronounceable: request.pronounceable.unwrap_or(false),
        bulk_count: request.bulk_count.unwrap_or(1),
    };

    let passwords = match service.generate(&options) {
        Ok(passwords) => passwords,
        Err(e) => {
            error!("Password generation failed: {}", e);
            return HttpResponse::BadRequest().json(GenerateResponse {
                success: false,
                passwords: Vec::new(),
                breach: None,
                error: Some(e.to_string()),
            });
        }
    };

    let texts: Vec<String> = passwords.into_iter().map(|p| p.text).collect();

    let breach = if request.check_breaches.unwrap_or(false) {
        Some(service.check_breach_batch(&texts).await)
    } else {
        None
    };

    HttpResponse::Ok().json(GenerateResponse {
        success: true,
        passwords: texts,
        breach,
        error: None,
    })
}
