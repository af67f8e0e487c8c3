//! Shared types for the employee service
//!
//! Wire types used by the server and its clients: the employee entity, the
//! response envelope and the error system.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::Employee;
pub use response::ApiResponse;
