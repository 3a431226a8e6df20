use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Upstream answered with a non-success status. `message` carries the
    /// status text and the response body.
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl AppError {
    /// Transient failures: network errors, rate limiting and server errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::ExternalServiceError(_) => true,
            AppError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            AppError::ApiError(_)
            | AppError::InvalidInput(_)
            | AppError::ConfigError(_)
            | AppError::SerializationError(_) => false,
        }
    }

    /// Status code of the upstream response, if the error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn response_status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::HttpStatus { .. }
            | AppError::ApiError(_)
            | AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) | AppError::SerializationError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            AppError::HttpStatus {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            AppError::ExternalServiceError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.response_status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
