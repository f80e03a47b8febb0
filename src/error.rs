use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Fixed body returned for every storage failure. Driver detail stays in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Fixed body returned when a request body cannot be decoded.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";

/// Fixed body returned when the query string cannot be decoded.
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query parameters";

/// Fixed body returned when a path segment cannot be decoded.
pub const INVALID_PATH_MESSAGE: &str = "Invalid path parameter";

/// Failure reported by the data-access layer.
///
/// The variant records which step of the single-statement round trip failed.
/// All of them surface to clients as the same 500 response.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to acquire database connection: {0}")]
    Acquire(#[source] sqlx::Error),
    #[error("failed to prepare statement: {0}")]
    Prepare(#[source] sqlx::Error),
    #[error("failed to execute statement: {0}")]
    Execute(#[source] sqlx::Error),
}

impl StorageError {
    /// Name of the failed step, used as a structured logging field.
    pub fn stage(&self) -> &'static str {
        match self {
            StorageError::Acquire(_) => "acquire",
            StorageError::Prepare(_) => "prepare",
            StorageError::Execute(_) => "execute",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        }
    }
}

/// Errors are written as a single plain-text line.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message + "\n",
        };

        (status, body).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        tracing::error!(stage = e.stage(), error = %e, "Database operation failed");
        AppError::internal(INTERNAL_ERROR_MESSAGE)
    }
}
