// src/api/handlers/checker.rs

use actix_web::{web, HttpResponse, Responder};
use crate::core::AppState;
use crate::api::types::{CheckPasswordRequest, CheckPasswordResponse, ErrorResponse};
use log::debug;

/// Check password strength
///
/// Runs every strength check and returns the verdict with one feedback line per check.
#[utoipa::path(
    post,
    path = "/check_password",
    tag = "Checker",
    request_body = CheckPasswordRequest,
    responses(
        (status = 200, description = "Strength verdict and feedback", body = CheckPasswordResponse),
        (status = 400, description = "No password provided", body = ErrorResponse)
    )
)]
pub async fn check_password(
    state: web::Data<AppState>,
    req: web::Json<CheckPasswordRequest>,
) -> impl Responder {
    let password = match req.into_inner().password {
        Some(password) if !password.is_empty() => password,
        _ => {
            debug!("Rejected strength check without a password");
            return HttpResponse::BadRequest().json(ErrorResponse::new("No password provided"));
        }
    };

    let evaluation = state.checker.evaluate(&password);
    debug!(
        "Evaluated password as {} ({} checks failed)",
        evaluation.strength,
        evaluation.failed_checks().count()
    );

    HttpResponse::Ok().json(CheckPasswordResponse::from(evaluation))
}
