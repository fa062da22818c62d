//! Member API 模块

mod form;
mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub use form::MemberForm;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/members", get(handler::list).post(handler::create))
        .route(
            "/api/members/{id}",
            put(handler::update).delete(handler::delete),
        )
}
