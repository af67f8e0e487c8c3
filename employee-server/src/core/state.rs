//! 服务器状态
//!
//! 所有 handler 共享的依赖，clone 成本很低 (内部均为连接池句柄)。

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::services::EmployeeService;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub employees: EmployeeService,
}

impl ServerState {
    /// 根据配置初始化: 工作目录 -> 数据库 (含迁移) -> 服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir().map_err(ServerError::WorkDir)?;

        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        tracing::info!(database_url = %config.database_url, "Database ready");

        Ok(Self::with_db(config.clone(), db))
    }

    /// 使用已有数据库构建状态 (测试中配合 `DbService::in_memory`)
    pub fn with_db(config: Config, db: DbService) -> Self {
        let employees = EmployeeService::new(db.pool.clone());
        Self {
            config,
            db,
            employees,
        }
    }
}
