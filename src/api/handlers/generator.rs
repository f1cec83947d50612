// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, warn};

use crate::api::types::{PasswordAnalysisResponse, PasswordGenerationRequest, PasswordGenerationResponse};
use crate::api::AppState;
use crate::core::{rng_for, ServiceError};
use crate::generators::strength_feedback;

/// Generate a password
///
/// Generates a password from the provided options and records it in the history.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Options produce no usable characters", body = PasswordGenerationResponse),
        (status = 500, description = "History could not be saved", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let policy = generation_req.to_policy(state.config.default_policy());
    debug!("Generating password with {:?}", policy);

    let result = {
        let mut rng = rng_for(None);
        state.service().generate(&policy, &mut *rng, true)
    };

    match result {
        Ok(generated) => HttpResponse::Ok().json(PasswordGenerationResponse {
            success: true,
            password: Some(generated.password),
            strength: Some(generated.strength.score),
            tier: Some(generated.strength.tier),
            color: Some(generated.strength.tier.color().to_string()),
            error: None,
        }),
        Err(ServiceError::Generator(e)) => {
            HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e.to_string()))
        }
        Err(e) => {
            warn!("Password generation failed: {}", e);
            HttpResponse::InternalServerError().json(PasswordGenerationResponse::failure(format!(
                "Failed to generate password: {}",
                e
            )))
        }
    }
}

/// Analyze password strength
///
/// Scores a password and suggests improvements.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let password = path.into_inner();
    let strength = state.service().analyze(&password);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength: strength.score,
        tier: strength.tier,
        color: strength.tier.color().to_string(),
        feedback: strength_feedback(&password),
    })
}
