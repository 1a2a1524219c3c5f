use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{"error": "...", "code": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx (connectivity, pool timeout, constraint
    /// violation, malformed statement).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body is neither JSON nor URL-encoded form data.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Database(err) => {
                // Never echo driver messages; they may carry schema or credentials.
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                msg.clone(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
