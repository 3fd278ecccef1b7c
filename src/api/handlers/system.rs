// src/api/handlers/system.rs

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::service::PasswordService;
use crate::api::types::SystemStatusResponse;

/// Service status
#[utoipa::path(
    get,
    path = "/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Service status", body = SystemStatusResponse)
    )
)]
pub async fn get_status(service: web::Data<Arc<PasswordService>>) -> impl Responder {
    HttpResponse::Ok().json(SystemStatusResponse {
        success: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: service.uptime_seconds(),
        history_entries: service.history_len().unwrap_or(0),
    })
}
