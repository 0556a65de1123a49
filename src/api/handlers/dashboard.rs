// src/api/handlers/dashboard.rs
use actix_web::{http::header::ContentType, HttpResponse, Responder};

const DASHBOARD_HTML: &str = include_str!("../../../static/dashboard.html");

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(DASHBOARD_HTML)
}
