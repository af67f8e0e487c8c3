//! Unified error system for the employee service
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type carrying a code and a message
//!
//! `AppError` implements axum's `IntoResponse`: the HTTP status comes from the
//! code and the body is always an [`ApiResponse`](crate::response::ApiResponse)
//! envelope with `statusCode = 0`.
//!
//! | Failure | HTTP | Envelope message |
//! |---------|------|------------------|
//! | not found | 404 | `Error: {message}` |
//! | method not allowed | 405 | `Error: {message}` |
//! | invalid argument | 400 | `Error: {message}` |
//! | runtime failure | 400 | `Error: {message}` |
//! | anything else | 500 | `Error interno del servidor: {message}` |
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::invalid_argument("El ID del empleado es inválido");
//! assert_eq!(err.code, ErrorCode::InvalidArgument);
//! assert_eq!(err.envelope_message(), "Error: El ID del empleado es inválido");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ERROR_PREFIX, INTERNAL_ERROR_PREFIX};
