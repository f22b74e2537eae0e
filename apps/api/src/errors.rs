use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Per-file screening failures (bad PDF, failed completion call) never reach
/// this type: they are absorbed inside the batch loop and reported inline in
/// the response body. `AppError` covers only request-level problems.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Multipart(e) => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_UPLOAD",
                format!("Could not read multipart upload: {e}"),
            ),
            AppError::Export(e) => {
                tracing::error!("CSV export error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "Failed to serialize results".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
