//! Static Pages
//!
//! Serves the public/admin pages and their assets from the public directory
//! as the router fallback. `/` and directory paths map to `index.html`.

use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use http::{Method, Uri};

use super::uploads::FileResponse;
use crate::core::ServerState;

const INDEX_FILE: &str = "index.html";

/// Router fallback: serve a file from the public directory
pub async fn serve_public_file(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
) -> FileResponse {
    if method != Method::GET && method != Method::HEAD {
        return FileResponse::NotFound;
    }

    let Some(relative) = sanitize_path(uri.path()) else {
        return FileResponse::BadRequest("Invalid path");
    };

    let mut file_path = state.config.public_dir.join(relative);
    if tokio::fs::metadata(&file_path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
    {
        file_path.push(INDEX_FILE);
    }

    FileResponse::read(&file_path).await
}

/// URL path → relative path inside the public directory
///
/// Each segment is percent-decoded on its own, so an encoded `/` can never
/// introduce a new component. Returns `None` for anything that would escape
/// the directory.
fn sanitize_path(path: &str) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for segment in path.split('/') {
        let decoded = urlencoding::decode(segment).ok()?;
        if decoded.contains(['/', '\\', '\0']) {
            return None;
        }
        for component in Path::new(decoded.as_ref()).components() {
            match component {
                Component::Normal(part) => out.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
    }
    Some(out)
}
