//! Upload Routes
//!
//! Serves stored member photos under `/uploads`.

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use http::header;

use crate::core::ServerState;

/// Upload file response
pub enum FileResponse {
    Ok { content: Bytes, mime: String },
    NotFound,
    BadRequest(&'static str),
}

impl FileResponse {
    /// Read a file from disk, guessing its content type from the extension
    pub async fn read(path: &std::path::Path) -> Self {
        match tokio::fs::read(path).await {
            Ok(content) => {
                let mime = mime_guess::from_path(path)
                    .first_or_octet_stream()
                    .to_string();
                FileResponse::Ok {
                    content: content.into(),
                    mime,
                }
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "File not found");
                FileResponse::NotFound
            }
        }
    }
}

impl IntoResponse for FileResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            FileResponse::Ok { content, mime } => (
                http::StatusCode::OK,
                [(header::CONTENT_TYPE, mime)],
                content,
            )
                .into_response(),
            FileResponse::NotFound => {
                (http::StatusCode::NOT_FOUND, "File not found").into_response()
            }
            FileResponse::BadRequest(msg) => {
                (http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}

/// Serve uploaded file handler
async fn serve_uploaded_file(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> FileResponse {
    // Security check: prevent path traversal
    let Some(file_path) = state.photos.resolve(&filename) else {
        return FileResponse::BadRequest("Invalid filename");
    };

    FileResponse::read(&file_path).await
}

/// Build upload router
pub fn router() -> Router<ServerState> {
    Router::new().route("/uploads/{filename}", get(serve_uploaded_file))
}
