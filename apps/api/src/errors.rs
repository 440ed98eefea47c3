use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::editor::EditorError;
use crate::export::ExportError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A remote service failure. The message is already user-facing.
    #[error("{0}")]
    Backend(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// `message` is shown to the user; `cause` is only logged.
    #[error("{message}")]
    Export {
        message: &'static str,
        cause: String,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub const PDF_EXPORT_FAILED: &str = "Failed to generate PDF. Please try again.";
pub const TEXT_EXPORT_FAILED: &str = "Failed to download text version. Please try again.";

impl From<EditorError> for AppError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::Store(e) => AppError::Storage(e),
            other => AppError::NotFound(other.to_string()),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::Export {
            message: PDF_EXPORT_FAILED,
            cause: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Backend(msg) => {
                tracing::warn!("Backend error: {msg}");
                (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", msg.clone())
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Failed to save your resume".to_string(),
                )
            }
            AppError::Export { message, cause } => {
                tracing::error!("Export error: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    message.to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Backend("x".into()), StatusCode::BAD_GATEWAY),
            (
                AppError::from(ExportError::NoPages),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_export_error_hides_cause() {
        let err = AppError::from(ExportError::NoPages);
        assert_eq!(err.to_string(), PDF_EXPORT_FAILED);
    }

    #[test]
    fn test_missing_entry_is_not_found() {
        let err = AppError::from(EditorError::NoSuchEntry {
            section: "education",
            index: 3,
        });
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains("education")));
    }
}
