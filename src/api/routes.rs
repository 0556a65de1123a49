// src/api/routes.rs
use actix_web::{error, web, HttpRequest, HttpResponse};
use actix_web::error::JsonPayloadError;
use super::handlers;
use super::types::ErrorResponse;

// Malformed bodies get the same `{error}` shape as every other client error
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    log::debug!("{}", message);
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorResponse::new(message)))
        .into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // Dashboard
    cfg.route("/", web::get().to(handlers::dashboard::index));

    // Strength checker
    cfg.route("/check_password", web::post().to(handlers::checker::check_password));

    // Password generator
    cfg.route("/generate_password", web::post().to(handlers::generator::generate_password));
}
