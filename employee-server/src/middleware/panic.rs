//! Panic 处理
//!
//! A panicking handler becomes a 500 envelope instead of a dropped connection.

use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::utils::AppError;

/// Response for [`tower_http::catch_panic::CatchPanicLayer::custom`]
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "panic".to_string()
    };

    tracing::error!(detail = %detail, "Handler panicked");
    AppError::internal(detail).into_response()
}
