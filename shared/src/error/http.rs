//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            // 405 Method Not Allowed
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (invalid arguments and unclassified runtime failures)
            Self::RuntimeFailure | Self::InvalidArgument | Self::InvalidRequest => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
