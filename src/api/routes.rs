// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
    );

    // Password history
    cfg.service(
        web::scope("/history")
            .route("", web::get().to(handlers::history::list_history))
            .route("", web::delete().to(handlers::history::clear_history))
            .route("/export/csv", web::get().to(handlers::history::export_csv))
            .route("/export/txt", web::get().to(handlers::history::export_txt))
    );

    // Breach checking
    cfg.service(
        web::scope("/breach")
            .route("/check", web::post().to(handlers::breach::check_password))
            .route("/check-batch", web::post().to(handlers::breach::check_batch))
    );

    // Settings
    cfg.service(
        web::scope("/settings")
            .route("/dark-mode", web::get().to(handlers::settings::get_dark_mode))
            .route("/dark-mode", web::put().to(handlers::settings::set_dark_mode))
    );

    // System
    cfg.service(
        web::scope("/system")
            .route("/status", web::get().to(handlers::system::get_status))
    );
}
