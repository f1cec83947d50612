// src/api/handlers/history.rs

use actix_web::{http::header, web, HttpResponse, Responder};
use log::{error, info};

use crate::api::types::{HistoryListResponse, SuccessResponse};
use crate::api::AppState;
use crate::history::EXPORT_FILE_NAME;

/// List generated passwords
///
/// Returns the remembered passwords, newest first.
#[utoipa::path(
    get,
    path = "/history",
    tag = "History",
    responses(
        (status = 200, description = "History entries", body = HistoryListResponse)
    )
)]
pub async fn list_history(state: web::Data<AppState>) -> impl Responder {
    let entries = state.service().history().to_vec();
    HttpResponse::Ok().json(HistoryListResponse {
        success: true,
        entries,
    })
}

/// Clear the history
#[utoipa::path(
    delete,
    path = "/history",
    tag = "History",
    responses(
        (status = 200, description = "History cleared", body = SuccessResponse),
        (status = 500, description = "History could not be cleared", body = SuccessResponse)
    )
)]
pub async fn clear_history(state: web::Data<AppState>) -> impl Responder {
    match state.service().clear_history() {
        Ok(()) => {
            info!("History cleared through the API");
            HttpResponse::Ok().json(SuccessResponse {
                success: true,
                message: Some("History cleared".to_string()),
                error: None,
            })
        }
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

/// Export the history as CSV
#[utoipa::path(
    get,
    path = "/history/export",
    tag = "History",
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv")
    )
)]
pub async fn export_history(state: web::Data<AppState>) -> impl Responder {
    let csv = state.service().export_history();
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ))
        .body(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::configure_routes;
    use crate::core::config::Config;
    use crate::core::PasswordService;
    use crate::generators::PasswordGenerator;
    use crate::history::HistoryStore;
    use crate::models::HistoryEntry;
    use actix_web::{test, App};

    fn state_with(passwords: &[&str]) -> web::Data<AppState> {
        let mut history = HistoryStore::in_memory();
        for password in passwords {
            history.append(HistoryEntry::new(*password)).unwrap();
        }
        web::Data::new(AppState::new(
            PasswordService::new(PasswordGenerator::default(), history),
            Config::default(),
        ))
    }

    #[actix_web::test]
    async fn list_is_newest_first() {
        let app = test::init_service(
            App::new().app_data(state_with(&["one", "two"])).configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/history").to_request();
        let resp: HistoryListResponse = test::call_and_read_body_json(&app, req).await;

        let passwords: Vec<_> = resp.entries.iter().map(|e| e.password.as_str()).collect();
        assert_eq!(passwords, vec!["two", "one"]);
    }

    #[actix_web::test]
    async fn export_is_a_csv_attachment() {
        let app = test::init_service(
            App::new().app_data(state_with(&["a\"b"])).configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/history/export").to_request();
        let resp = test::call_service(&app, req).await;
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap().to_str().unwrap().to_string();
        assert!(disposition.contains("password_history.csv"));

        let body = test::read_body(resp).await;
        let csv = std::str::from_utf8(&body).unwrap();
        assert!(csv.starts_with("Password,Generated\n\"a\"\"b\","));
    }

    #[actix_web::test]
    async fn delete_clears() {
        let state = state_with(&["x"]);
        let app = test::init_service(App::new().app_data(state.clone()).configure(configure_routes)).await;

        let req = test::TestRequest::delete().uri("/history").to_request();
        let resp: SuccessResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        assert!(state.service().history().is_empty());
    }
}
