use employee_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env (不存在时忽略)
    let _ = dotenvy::dotenv();

    // 2. 加载配置并初始化日志
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );

    print_banner();
    tracing::info!(environment = %config.environment, "Employee server starting...");

    // 3. 初始化服务器状态 (工作目录、数据库、迁移)
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
