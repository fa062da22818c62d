//! Roster Server - 队员名册 Web 服务
//!
//! # 架构概述
//!
//! 名册 (队员 + 每位队员的历史记录) 存放在单个 JSON 文件中，
//! 队员照片存放在本地上传目录。对外提供 REST 风格的 JSON API，
//! 并托管前端的公开页与管理页。
//!
//! # 模块结构
//!
//! ```text
//! roster-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── store/         # JSON 文档存储 (单写者)
//! ├── services/      # 照片、队员、记录服务与 HTTP 组装
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、日期工具
//! ```

pub mod api;
pub mod core;
pub mod services;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use services::http::build_router;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在则忽略)
/// 2. 读取配置
/// 3. 按配置初始化日志
pub fn setup_environment() -> Result<Config, Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#
    );
}
