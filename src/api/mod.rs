// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::service::PasswordService;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,

        // History endpoints
        crate::api::handlers::history::list_history,
        crate::api::handlers::history::clear_history,
        crate::api::handlers::history::export_csv,
        crate::api::handlers::history::export_txt,

        // Breach check endpoints
        crate::api::handlers::breach::check_password,
        crate::api::handlers::breach::check_batch,

        // Settings endpoints
        crate::api::handlers::settings::get_dark_mode,
        crate::api::handlers::settings::set_dark_mode,

        // System endpoints
        crate::api::handlers::system::get_status
    ),
    components(
        schemas(
            crate::api::types::SuccessResponse,
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::HistoryEntryInfo,
            crate::api::types::HistoryResponse,
            crate::api::types::BreachCheckRequest,
            crate::api::types::BreachCheckResponse,
            crate::api::types::BatchBreachRequest,
            crate::api::types::BatchBreachResponse,
            crate::api::types::DarkModeRequest,
            crate::api::types::DarkModeResponse,
            crate::api::types::SystemStatusResponse,

            crate::models::GenerationOptions,
            crate::models::GeneratedPassword,
            crate::models::HistoryEntry,
            crate::models::BreachStatus,
            crate::models::BreachResult,
            crate::models::BatchBreachSummary
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "History", description = "Password history and export endpoints"),
        (name = "Breach", description = "Breach corpus range-query endpoints"),
        (name = "Settings", description = "User preference endpoints"),
        (name = "System", description = "System status and utilities")
    ),
    info(
        title = "QuickPwd API",
        version = "0.1.0",
        description = "Password generator with breach checking and capped history"
    )
)]
struct ApiDoc;

pub async fn start_server(
    service: Arc<PasswordService>,
    address: String,
    port: u16,
) -> std::io::Result<()> {
    log::info!("Starting QuickPwd API server on {}:{}", address, port);

    let service_data = web::Data::new(service);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(service_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
