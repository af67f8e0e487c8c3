//! Error type and its translation into the response envelope

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use crate::response::ApiResponse;
use http::StatusCode;
use thiserror::Error;

/// Prefix for client-side failures (4xx)
pub const ERROR_PREFIX: &str = "Error: ";
/// Prefix for server-side failures (5xx)
pub const INTERNAL_ERROR_PREFIX: &str = "Error interno del servidor: ";

/// Application error with structured error code
///
/// Every failure raised by the service layer or the controller ends up as an
/// `AppError`; the axum integration below is the single place where failures
/// become HTTP responses.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Message as rendered into the envelope
    ///
    /// Server errors (5xx) get the internal prefix, everything else the plain one.
    pub fn envelope_message(&self) -> String {
        if self.http_status().is_server_error() {
            format!("{INTERNAL_ERROR_PREFIX}{}", self.message)
        } else {
            format!("{ERROR_PREFIX}{}", self.message)
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a not found error (404)
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, msg)
    }

    /// Create an invalid argument error (400)
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidArgument, msg)
    }

    /// Create a generic runtime failure (400)
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::RuntimeFailure, msg)
    }

    /// Create an invalid request error (400)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an internal error (500)
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error (500)
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // Log system errors
        if matches!(self.code.category(), ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        } else {
            tracing::debug!(
                code = %self.code,
                category = self.code.category().name(),
                message = %self.message,
                "Request failed"
            );
        }

        let body = ApiResponse::<()>::fail(self.envelope_message());
        (status, Json(body)).into_response()
    }
}
