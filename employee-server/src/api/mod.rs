//! API 路由模块
//!
//! # 结构
//!
//! - [`employees`] - 员工管理接口 (`/api/empleados`)
//! - [`health`] - 健康检查
//! - [`extract`] - 请求提取器 (拒绝统一转换为响应信封)

pub mod employees;
pub mod extract;
pub mod health;

use axum::Router;
use axum::http::{Method, Uri};

use crate::core::ServerState;
use crate::utils::{AppError, ErrorCode};

/// All application routes (without state)
///
/// Unknown paths and unsupported methods also answer with the envelope.
pub fn routes() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(employees::router())
        .merge(health::router())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(fallback)
}

async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(format!("Ruta no encontrada: {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    let code = ErrorCode::MethodNotAllowed;
    AppError::with_message(
        code,
        format!("{} {} {}", code.message(), method, uri.path()),
    )
}
