use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sipay_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sipay_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body that could not be read as a JSON object.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // Validation failures go back as plain text, one message per line.
            AppError::Core(CoreError::Validation(failure)) => {
                if failure.is_empty() {
                    return StatusCode::BAD_REQUEST.into_response();
                }
                return (StatusCode::BAD_REQUEST, failure.to_string()).into_response();
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
