//! 服务器启动与运行错误
//!
//! 请求级错误使用 [`AppError`](crate::utils::AppError)，这里只覆盖进程级失败。

use thiserror::Error;

use crate::utils::AppError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("工作目录不可用: {0}")]
    WorkDir(#[source] std::io::Error),

    #[error("端口绑定失败 {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("数据库初始化失败: {0}")]
    Database(#[from] AppError),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
