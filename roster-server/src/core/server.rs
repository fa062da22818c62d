//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::time::Duration;

use crate::core::{Config, Result, ServerState};
use crate::services::http::{build_router, start_server};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Open the data file and uploads directory, then build the server
    pub async fn initialize(config: Config) -> Result<Self> {
        let state = ServerState::initialize(&config).await?;
        Ok(Self { config, state })
    }

    pub async fn run(&self) -> Result<()> {
        let app = build_router(self.state.clone());

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        start_server(
            app,
            self.config.http_port,
            Duration::from_millis(self.config.shutdown_timeout_ms),
            shutdown,
        )
        .await
        .map_err(|e| crate::core::ServerError::Internal(e.into()))?;

        Ok(())
    }
}
