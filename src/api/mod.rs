// src/api/mod.rs
use actix_web::{middleware, web, App, HttpServer};
use actix_cors::Cors;
use crate::core::AppState;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::checker::check_password,
        crate::api::handlers::generator::generate_password
    ),
    components(
        schemas(
            crate::api::types::CheckPasswordRequest,
            crate::api::types::CheckPasswordResponse,
            crate::api::types::GeneratePasswordRequest,
            crate::api::types::GeneratePasswordResponse,
            crate::api::types::ErrorResponse,
            crate::models::Strength
        )
    ),
    tags(
        (name = "Checker", description = "Password strength evaluation"),
        (name = "Generator", description = "Password generation")
    ),
    info(
        title = "passcheck API",
        version = "0.1.0",
        description = "Password strength checker and generator",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(state: AppState, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting passcheck API server on {}:{}", address, port);

    let state_data = web::Data::new(state);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::dictionary::Dictionaries;
    use crate::models::GenerationMode;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn state() -> AppState {
        let common: HashSet<String> = ["password", "password1!", "123456"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let words = vec!["river".to_string(), "castle".to_string(), "garden".to_string()];
        let dictionaries = Dictionaries {
            common_passwords: Arc::new(common),
            words: Arc::new(words),
        };
        AppState::new(dictionaries, &Config::default())
    }

    macro_rules! app {
        ($state:expr) => {
            actix_test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(routes::configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn check_password_reports_weak_common_password() {
        let app = app!(state());
        let req = actix_test::TestRequest::post()
            .uri("/check_password")
            .set_json(json!({ "password": "Password1!" }))
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["strength"], "Weak");
        assert_eq!(body["feedback"].as_array().map(Vec::len), Some(7));
        assert_eq!(body["feedback"][0], "✅ Good length!");
        assert_eq!(body["feedback"][4], "❌ Oh no! This is too common and easy to guess.");
    }

    #[actix_web::test]
    async fn check_password_reports_strong_password() {
        let app = app!(state());
        let req = actix_test::TestRequest::post()
            .uri("/check_password")
            .set_json(json!({ "password": "xK9$mQ2vPz" }))
            .to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["strength"], "Strong");
        assert_eq!(body["feedback"].as_array().map(Vec::len), Some(7));
    }

    #[actix_web::test]
    async fn check_password_without_password_is_a_client_error() {
        let app = app!(state());
        for payload in [json!({}), json!({ "password": null }), json!({ "password": "" })] {
            let req = actix_test::TestRequest::post()
                .uri("/check_password")
                .set_json(payload)
                .to_request();

            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = actix_test::read_body_json(resp).await;
            assert_eq!(body["error"], "No password provided");
        }
    }

    #[actix_web::test]
    async fn malformed_json_is_a_client_error() {
        let app = app!(state());
        let req = actix_test::TestRequest::post()
            .uri("/check_password")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert!(body["error"].as_str().is_some());
    }

    #[actix_web::test]
    async fn generate_password_defaults_to_regular_twelve() {
        let state = state();
        let log = Arc::clone(&state.log);
        let app = app!(state);
        let req = actix_test::TestRequest::post()
            .uri("/generate_password")
            .set_json(json!({}))
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(resp).await;
        let password = body["password"].as_str().expect("password string");
        assert_eq!(password.chars().count(), 12);

        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mode, GenerationMode::Regular);
        assert_eq!(entries[0].password, password);
    }

    #[actix_web::test]
    async fn generate_password_with_words() {
        let state = state();
        let log = Arc::clone(&state.log);
        let app = app!(state);
        let req = actix_test::TestRequest::post()
            .uri("/generate_password")
            .set_json(json!({ "length": 16, "use_words": true }))
            .to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        let password = body["password"].as_str().expect("password string");
        assert!(password.chars().count() >= 16);
        assert_eq!(log.entries()[0].mode, GenerationMode::WordBased);
    }

    #[actix_web::test]
    async fn generate_password_rejects_bad_lengths() {
        let state = state();
        let log = Arc::clone(&state.log);
        let app = app!(state);
        for length in [7, 0, -3, 129] {
            let req = actix_test::TestRequest::post()
                .uri("/generate_password")
                .set_json(json!({ "length": length }))
                .to_request();

            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "length {length}");
            let body: Value = actix_test::read_body_json(resp).await;
            assert!(body["error"].as_str().is_some());
        }
        assert!(log.is_empty());
    }

    #[actix_web::test]
    async fn generate_password_accepts_numeric_string_length() {
        let app = app!(state());
        let req = actix_test::TestRequest::post()
            .uri("/generate_password")
            .set_json(json!({ "length": "16" }))
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["password"].as_str().map(|p| p.chars().count()), Some(16));

        let req = actix_test::TestRequest::post()
            .uri("/generate_password")
            .set_json(json!({ "length": "long" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn dashboard_is_served_at_root() {
        let app = app!(state());
        let req = actix_test::TestRequest::get().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = actix_test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).map_or(false, |html| html.contains("/check_password")));
    }

    #[test]
    fn openapi_lists_both_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/check_password"));
        assert!(doc.paths.paths.contains_key("/generate_password"));
    }
}
