pub mod chat;
pub mod uploads;

use actix_web::HttpResponse;
use serde_json::json;

use crate::errors::ApiError;

pub const SERVICE_NAME: &str = "NexGen API";

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}
