// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::core::AppState;
use crate::models::GenerationMode;
use crate::api::types::{GeneratePasswordRequest, GeneratePasswordResponse, ErrorResponse};
use log::warn;

/// Longest password the API will build.
pub const MAX_PASSWORD_LENGTH: i64 = 128;

/// Generate a password
///
/// Builds a regular or word-based password. Every generated password is recorded in the
/// generation log together with its strength verdict.
#[utoipa::path(
    post,
    path = "/generate_password",
    tag = "Generator",
    request_body = GeneratePasswordRequest,
    responses(
        (status = 200, description = "Generated password", body = GeneratePasswordResponse),
        (status = 400, description = "Invalid length", body = ErrorResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    req: web::Json<GeneratePasswordRequest>,
) -> impl Responder {
    let req = req.into_inner();
    let length = req.length.unwrap_or(state.default_length as i64);
    let mode = GenerationMode::from_use_words(req.use_words.unwrap_or(false));

    if length > MAX_PASSWORD_LENGTH {
        return HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Password length must be at most {} characters.",
            MAX_PASSWORD_LENGTH
        )));
    }

    // Negative lengths fall through as 0 and are rejected by the generator
    let length = usize::try_from(length).unwrap_or(0);

    match state.generator.generate(length, mode) {
        Ok(password) => HttpResponse::Ok().json(GeneratePasswordResponse { password }),
        Err(e) => {
            warn!("Password generation rejected: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string()))
        }
    }
}
