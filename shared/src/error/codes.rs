//! Unified error codes for the employee service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! The numeric code never reaches the wire: the envelope only carries the
//! domain flag `statusCode` (1/0). Codes drive the HTTP status and logging.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Business-rule or runtime failure not otherwise classified
    RuntimeFailure = 1,
    /// Argument failed a precondition (e.g. non-positive identifier)
    InvalidArgument = 2,
    /// Resource not found
    NotFound = 3,
    /// Route exists but does not accept the HTTP method
    MethodNotAllowed = 4,
    /// Request could not be decoded (malformed path or body)
    InvalidRequest = 5,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Proceso Exitoso",
            ErrorCode::RuntimeFailure => "Error en el proceso",
            ErrorCode::InvalidArgument => "Argumento inválido",
            ErrorCode::NotFound => "Recurso no encontrado",
            ErrorCode::MethodNotAllowed => "Método no permitido",
            ErrorCode::InvalidRequest => "Solicitud inválida",
            ErrorCode::EmployeeNotFound => "Empleado no encontrado",
            ErrorCode::InternalError => "Error interno",
            ErrorCode::DatabaseError => "Error de base de datos",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::RuntimeFailure),
            2 => Ok(ErrorCode::InvalidArgument),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::MethodNotAllowed),
            5 => Ok(ErrorCode::InvalidRequest),
            8001 => Ok(ErrorCode::EmployeeNotFound),
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
