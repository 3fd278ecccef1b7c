// src/api/handlers/history.rs

use actix_web::{web, HttpResponse, Responder, http::header};
use std::sync::Arc;
use log::error;

use crate::core::service::PasswordService;
use crate::api::types::{HistoryEntryInfo, HistoryResponse, SuccessResponse};

/// List password history
///
/// Returns the history of generated passwords, newest first, capped at
/// 100 entries.
#[utoipa::path(
    get,
    path = "/history",
    tag = "History",
    responses(
        (status = 200, description = "History entries", body = HistoryResponse),
        (status = 500, description = "Server error", body = HistoryResponse)
    )
)]
pub async fn list_history(service: web::Data<Arc<PasswordService>>) -> impl Responder {
    match service.history() {
        Ok(entries) => {
            let entries = entries
                .into_iter()
                .map(|entry| HistoryEntryInfo {
                    id: entry.id.to_string(),
                    password: entry.password,
                    timestamp: entry.timestamp.to_rfc3339(),
                })
                .collect();
            HttpResponse::Ok().json(HistoryResponse {
                success: true,
                entries,
                error: None,
            })
        }
        Err(e) => {
            error!("Failed to read history: {}", e);
            HttpResponse::InternalServerError().json(HistoryResponse {
                success: false,
                entries: Vec::new(),
                error: Some(e.to_string()),
            })
        }
    }
}

/// Clear password history
#[utoipa::path(
    delete,
    path = "/history",
    tag = "History",
    responses(
        (status = 200, description = "History cleared", body = SuccessResponse),
        (status = 500, description = "Server error", body = SuccessResponse)
    )
)]
pub async fn clear_history(service: web::Data<Arc<PasswordService>>) -> impl Responder {
    match service.clear_history() {
        Ok(()) => HttpResponse::Ok().json(SuccessResponse {
            success: true,
            message: Some("History cleared".to_string()),
            error: None,
        }),
        Err(e) => {
            error!("Failed to clear history: {}", e);
            HttpResponse::InternalServerError().json(SuccessResponse {
                success: false,
                message: None,
                error: Some(e.to_string()),
            })
        }
    }
}

/// Export history as CSV
///
/// One double-quoted password per line under a `Password` header.
#[utoipa::path(
    get,
    path = "/history/export/csv",
    tag = "History",
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv"),
        (status = 500, description = "Server error", body = SuccessResponse)
    )
)]
pub async fn export_csv(service: web::Data<Arc<PasswordService>>) -> impl Responder {
    match service.export_history_csv() {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"password-history.csv\"",
            ))
            .body(csv),
        Err(e) => {
            error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().json(SuccessResponse {
                success: false,
                message: None,
                error: Some(e.to_string()),
            })
        }
    }
}

/// Export history as plain text
///
/// Newline-joined passwords, newest first.
#[utoipa::path(
    get,
    path = "/history/export/txt",
    tag = "History",
    responses(
        (status = 200, description = "Plaintext export", content_type = "text/plain"),
        (status = 500, description = "Server error", body = SuccessResponse)
    )
)]
pub async fn export_txt(service: web::Data<Arc<PasswordService>>) -> impl Responder {
    match service.export_history_text() {
        Ok(text) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"passwords.txt\"",
            ))
            .body(text),
        Err(e) => {
            error!("Text export failed: {}", e);
            HttpResponse::InternalServerError().json(SuccessResponse {
                success: false,
                message: None,
                error: Some(e.to_string()),
            })
        }
    }
}
