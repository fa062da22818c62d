use roster_server::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!("Roster server starting...");

    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Configuration loaded"
    );

    // 2. 初始化服务器状态 (数据文件、照片目录)
    let server = Server::initialize(config).await?;

    // 3. 启动 HTTP 服务器
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
