//! Member API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::Member;

use super::form::MemberForm;
use crate::core::ServerState;
use crate::utils::{AppResult, SuccessResponse};

/// GET /api/members - 获取所有队员
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.members.list().await?;
    Ok(Json(members))
}

/// POST /api/members - 创建队员
pub async fn create(
    State(state): State<ServerState>,
    form: MemberForm,
) -> AppResult<Json<Member>> {
    let member = state.members.create(form.fields, form.photo).await?;
    Ok(Json(member))
}

/// PUT /api/members/:id - 更新队员 (仅覆盖提供的字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    form: MemberForm,
) -> AppResult<Json<Member>> {
    let member = state.members.update(&id, form.fields, form.photo).await?;
    Ok(Json(member))
}

/// DELETE /api/members/:id - 删除队员及其照片
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.members.delete(&id).await?;
    Ok(Json(SuccessResponse::ok()))
}
