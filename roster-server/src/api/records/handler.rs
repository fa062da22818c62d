//! Record API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::{Record, RecordCreate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// POST /api/members/:id/records - 追加历史记录
pub async fn append(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<RecordCreate>, JsonRejection>,
) -> AppResult<Json<Record>> {
    let Json(payload) = payload.map_err(AppError::from)?;
    let record = state.records.append(&id, payload).await?;
    Ok(Json(record))
}
