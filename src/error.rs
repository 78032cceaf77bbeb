use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ErrorBody;

/// Central error type for the lupe-backend crate.
#[derive(Debug, Error)]
pub enum AppError {
    // Generic fallback (wraps anyhow)
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),

    // Domain-specific variants
    #[error("{0}")]
    BadRequest(String),

    #[error("Stem separation failed: {0}")]
    Separation(String),

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

// --- Implement From conversions for common errors ---
impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Anyhow(e.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Anyhow(e.into())
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::BadRequest(format!("Invalid multipart request: {e}"))
    }
}

// Client input errors map to 400, everything else surfaces as a 500 with the
// error's string representation as the `detail` field.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
