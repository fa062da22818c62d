//! 服务模块
//!
//! - [`PhotoManager`] - 照片写入与清理
//! - [`MemberService`] - 队员增删改查
//! - [`RecordService`] - 历史记录追加
//! - [`http`] - 路由组装与 HTTP 服务启动

pub mod http;
pub mod member;
pub mod photo;
pub mod record;

pub use member::MemberService;
pub use photo::{PhotoInput, PhotoManager};
pub use record::RecordService;
