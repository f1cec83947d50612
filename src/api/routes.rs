// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password))
    );

    // History routes
    cfg.service(
        web::scope("/history")
            .route("", web::get().to(handlers::history::list_history))
            .route("", web::delete().to(handlers::history::clear_history))
            .route("/export", web::get().to(handlers::history::export_history))
    );
}
