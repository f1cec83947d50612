// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use std::sync::{Mutex, MutexGuard};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::PasswordService;

pub mod types;
pub mod routes;
pub mod handlers;

/// Shared across workers; the history is only ever mutated under the lock.
pub struct AppState {
    pub service: Mutex<PasswordService>,
    pub config: Config,
}

impl AppState {
    pub fn new(service: PasswordService, config: Config) -> Self {
        Self {
            service: Mutex::new(service),
            config,
        }
    }

    pub fn service(&self) -> MutexGuard<'_, PasswordService> {
        // `append` swaps the list only after persisting, so poisoned data is still consistent
        self.service.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,

        // History endpoints
        crate::api::handlers::history::list_history,
        crate::api::handlers::history::clear_history,
        crate::api::handlers::history::export_history,
    ),
    components(
        schemas(
            crate::api::types::SuccessResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::HistoryListResponse,
            crate::models::HistoryEntry,
            crate::models::StrengthTier,
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "History", description = "Generated password history endpoints")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Random password generation, strength scoring and history",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(state: web::Data<AppState>, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting Passforge API server on {}:{}", address, port);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}
