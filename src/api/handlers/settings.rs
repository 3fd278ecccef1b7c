// src/api/handlers/settings.rs

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use log::error;

use crate::core::service::PasswordService;
use crate::api::types::{DarkModeRequest, DarkModeResponse};

/// Get the dark mode preference
#[utoipa::path(
    get,
    path = "/settings/dark-mode",
    tag = "Settings",
    responses(
        (status = 200, description = "Current preference", body = DarkModeResponse)
    )
)]
pub async fn get_dark_mode(service: web::Data<Arc<PasswordService>>) -> impl Responder {
    match service.dark_mode() {
        Ok(dark_mode) => HttpResponse::Ok().json(DarkModeResponse {
            success: true,
            dark_mode,
            error: None,
        }),
        Err(e) => {
            error!("Failed to read dark mode preference: {}", e);
            HttpResponse::InternalServerError().json(DarkModeResponse {
                success: false,
                dark_mode: false,
                error: Some(e.to_string()),
            })
        }
    }
}

/// Set the dark mode preference
#[utoipa::path(
    put,
    path = "/settings/dark-mode",
    tag = "Settings",
    request_body = DarkModeRequest,
    responses(
        (status = 200, description = "Preference stored", body = DarkModeResponse)
    )
)]
pub async fn set_dark_mode(
    service: web::Data<Arc<PasswordService>>,
    request: web::Json<DarkModeRequest>,
) -> impl Responder {
    match service.set_dark_mode(request.dark_mode) {
        Ok(()) => HttpResponse::Ok().json(DarkModeResponse {
            success: true,
            dark_mode: request.dark_mode,
            error: None,
        }),
        Err(e) => {
            error!("Failed to store dark mode preference: {}", e);
            HttpResponse::InternalServerError().json(DarkModeResponse {
                success: false,
                dark_mode: request.dark_mode,
                error: Some(e.to_string()),
            })
        }
    }
}
