//! API 路由模块
//!
//! # 结构
//!
//! - [`members`] - 队员增删改查
//! - [`records`] - 历史记录追加
//! - [`uploads`] - 照片访问 (`/uploads/{file}`)
//! - [`assets`] - 静态页面 (路由 fallback)
//! - [`health`] - 健康检查

pub mod assets;
pub mod health;
pub mod members;
pub mod records;
pub mod uploads;

// Re-export common types for handlers
pub use crate::utils::AppResult;
