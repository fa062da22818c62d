//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - 处理器与服务层的 Result 别名
//! - 日志、日期校验等工具

pub mod error;
pub mod logger;
pub mod result;
pub mod time;

pub use error::{AppError, ErrorBody};
pub use result::AppResult;

/// `DELETE` 成功响应体: `{"success": true}`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
