// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::strength;
use crate::api::types::{
    PasswordGenerationRequest, PasswordGenerationResponse,
    PasswordAnalysisRequest, PasswordAnalysisResponse,
};

/// Generate a password
///
/// Generates a random password of the requested length from the fixed
/// 70-character alphabet.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Length out of range", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let length = generation_req.length.unwrap_or(config.default_password_length);

    let mut generator = PasswordGenerator::new();
    let password = match generator.generate(length) {
        Ok(pwd) => pwd,
        Err(e) => {
            log::warn!("Rejected generation request: {}", e);
            return HttpResponse::BadRequest().json(PasswordGenerationResponse {
                success: false,
                password: None,
                strength: None,
                tips: None,
                error: Some(e.to_string()),
            });
        }
    };

    let strength = strength::evaluate(&password);

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(strength),
        tips: None,
        error: None,
    })
}

/// Analyze password strength
///
/// Scores a password and reports which tips it satisfies. An empty password
/// yields score 0 with an empty label.
#[utoipa::path(
    post,
    path = "/generator/analysis",
    tag = "Generator",
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(
    analysis_req: web::Json<PasswordAnalysisRequest>,
) -> impl Responder {
    HttpResponse::Ok().json(PasswordAnalysisResponse::for_password(&analysis_req.password))
}
