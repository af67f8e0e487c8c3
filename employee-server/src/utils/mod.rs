//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ApiResponse`] - API 响应信封 (from shared::response)
//! - 日志初始化

pub mod logger;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use shared::response::ApiResponse;
