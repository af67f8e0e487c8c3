use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | DATABASE_URL | sqlite:{WORK_DIR}/empleados.db | 数据库连接串 |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | - | 日志目录 (按天滚动)，未设置则输出到 stdout |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/empleados HTTP_PORT=9090 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// sqlx 格式的数据库地址
    pub database_url: String,
    pub db_max_connections: u32,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| default_database_url(&work_dir));

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url,
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            work_dir,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景。数据库地址跟随新的工作目录。
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.database_url = default_database_url(&config.work_dir);
        config
    }

    /// 确保工作目录存在
    pub fn ensure_work_dir(&self) -> std::io::Result<PathBuf> {
        let path = PathBuf::from(&self.work_dir);
        std::fs::create_dir_all(&path)?;
        Ok(path)
    }
}

fn default_database_url(work_dir: &str) -> String {
    format!("sqlite:{}/empleados.db", work_dir.trim_end_matches('/'))
}
