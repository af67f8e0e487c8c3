//! Employee Server - 员工管理 REST 服务
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): `/api/empleados` CRUD 与 `/health`
//! - **服务层** (`services`): 业务规则 (软删除、活跃过滤)
//! - **数据库** (`db`): SQLite 连接池、迁移与仓储
//! - **中间件** (`middleware`): CORS 与请求日志
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # CORS、日志
//! ├── services/      # 业务服务
//! ├── db/            # 数据库层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState, build_app};
pub use db::DbService;
pub use services::EmployeeService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ______                __
   / ____/___ ___  ____  / /__  ____ _____  ____
  / __/ / __ `__ \/ __ \/ / _ \/ __ `/ __ \/ __ \
 / /___/ / / / / / /_/ / /  __/ /_/ / /_/ / /_/ /
/_____/_/ /_/ /_/ .___/_/\___/\__,_/\__,_/\____/
               /_/
    "#
    );
}
