//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 (含队员数量) |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "members": 3 }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 名册中的队员数量
    members: usize,
}

/// 读取一次数据文件，文件损坏时返回 500
async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    let members = state.store.load().await?.members.len();
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        members,
    }))
}
