//! API Response types
//!
//! Every response of the service, success or failure, is wrapped in the same
//! envelope:
//!
//! ```json
//! {
//!     "uuid": "0f6c9a3e-...",
//!     "statusCode": 1,
//!     "message": "Proceso Exitoso",
//!     "info": { ... }
//! }
//! ```
//!
//! `statusCode` is the domain flag (1 = success, 0 = failure) and is
//! independent of the HTTP status.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain status code for a successful operation
pub const STATUS_SUCCESS: i32 = 1;
/// Domain status code for a failed operation
pub const STATUS_FAILURE: i32 = 0;

// 响应消息
pub const MSG_SUCCESS: &str = "Proceso Exitoso";
pub const MSG_SAVED: &str = "Empleado guardado con éxito";
pub const MSG_DELETED: &str = "Empleado eliminado con éxito";
pub const MSG_UPDATED: &str = "Empleado actualizado con éxito";
pub const MSG_NOT_FOUND: &str = "Empleado no encontrado";

/// Unified API response structure
///
/// `info` is generic so each endpoint states its payload type
/// (`Employee`, `Vec<Employee>` or `()` for empty responses).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Correlation id, freshly generated for every response
    pub uuid: String,
    /// Domain status (1 = success, 0 = failure)
    pub status_code: i32,
    /// Human-readable message
    pub message: String,
    /// Response payload; serialized as `null` when empty
    pub info: Option<T>,
}

impl<T> ApiResponse<T> {
    fn build(status_code: i32, message: impl Into<String>, info: Option<T>) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            status_code,
            message: message.into(),
            info,
        }
    }

    /// Create a successful response carrying a payload
    pub fn ok(message: impl Into<String>, info: T) -> Self {
        Self::build(STATUS_SUCCESS, message, Some(info))
    }

    /// Create a successful response without payload
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self::build(STATUS_SUCCESS, message, None)
    }

    /// Create a failure response (no payload)
    pub fn fail(message: impl Into<String>) -> Self {
        Self::build(STATUS_FAILURE, message, None)
    }

}

// Soft failures (e.g. GET by id on a missing record) still answer HTTP 200;
// only `AppError` changes the status line.
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (http::StatusCode::OK, axum::Json(self)).into_response()
    }
}
