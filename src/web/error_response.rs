use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;
use tracing::error;

use crate::error::CatalogError;

pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::InvalidName { .. }
            | CatalogError::InvalidEmail { .. }
            | CatalogError::ForbiddenDomain { .. }
            | CatalogError::AlreadySignedUp { .. }
            | CatalogError::ActivityFull { .. } => StatusCode::BAD_REQUEST,
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::InvalidSeed { .. } | CatalogError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = if status.is_server_error() {
            error!("catalog operation failed: {}", self);
            INTERNAL_ERROR_DETAIL.to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Malformed or mistyped request bodies get the same `{"detail"}` shape as
/// catalog errors, keeping axum's status (400, 415 or 422).
pub fn rejection_response(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    (status, Json(json!({ "detail": rejection.body_text() }))).into_response()
}

/// Response for a handler that panicked. The panic payload is logged, never
/// returned to the caller.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> http::Response<String> {
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("handler panicked: {}", message);

    let body = json!({ "detail": INTERNAL_ERROR_DETAIL }).to_string();
    let mut response = http::Response::new(body);
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    response
}
