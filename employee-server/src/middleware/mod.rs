//! HTTP 中间件
//!
//! - [`cors`] - 跨域响应头 (OPTIONS 预检直接返回)
//! - [`logging`] - 请求日志
//! - [`panic`] - handler panic 转换为 500 响应信封

pub mod cors;
pub mod logging;
pub mod panic;

pub use cors::cors_middleware;
pub use logging::logging_middleware;
pub use panic::panic_response;
