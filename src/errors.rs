use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::error::Category;
use serde_json::json;
use thiserror::Error;

/// Every failure a request can end in. All of them are the client's fault.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid JSON body: {0}")]
    MalformedJson(String),

    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    #[error("Payload exceeds limit of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedJson(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "detail": self.to_string()
        }))
    }
}

impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::OverflowKnownLength { limit, .. }
            | JsonPayloadError::Overflow { limit } => ApiError::PayloadTooLarge { limit },
            JsonPayloadError::ContentType => ApiError::UnsupportedMediaType,
            JsonPayloadError::Deserialize(e) => match e.classify() {
                // Well-formed JSON that does not fit the schema.
                Category::Data => ApiError::Validation(e.to_string()),
                _ => ApiError::MalformedJson(e.to_string()),
            },
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

/// Installed through `JsonConfig` so body extraction failures render like
/// every other `ApiError`.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
    ApiError::from(err).into()
}
