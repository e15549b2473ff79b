use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by every failing endpoint: `{"message": ..., "code": ...}`
/// where `code` repeats the HTTP status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Config(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        // Storage faults surface as a generic 500; the underlying error stays
        // in the logs.
        let message = match self {
            AppError::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };
        HttpResponse::build(status).json(serde_json::json!({
            "message": message,
            "code": status.as_u16(),
        }))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
