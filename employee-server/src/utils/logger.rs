//! Logging Infrastructure
//!
//! `RUST_LOG` wins over the configured level when set.

use std::path::Path;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "employee-server";

/// Initialize the logger with stdout output
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON format and daily rolling file output
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // 文件输出: 目录不可用时回退到 stdout
    let log_dir = log_dir.filter(|dir| std::fs::create_dir_all(Path::new(dir)).is_ok());

    let result = match (log_dir, json) {
        (Some(dir), true) => builder
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        (Some(dir), false) => builder
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
