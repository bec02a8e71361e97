//! Archive endpoint.
//!
//! GET /api/v1/repos/{repo}/+/archive/{*refs}?path=&prefix=&attributes=&time=&compression=
//!
//! `refs` carries the treeish and the requested filename in one segment, e.g.
//! `refs/heads/main.zip`. Responds with the resolved `ArchiveManifest` and a
//! `Content-Disposition` header naming the bare filename.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
};

use crate::error::Result;
use crate::git::ArchiveBackend;
use crate::models::{ArchiveManifest, ArchiveParams};
use crate::request::ArchiveRequest;
use crate::routes::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/repos/{repo}/+/archive/{*refs}", get(get_archive))
        .with_state(state)
}

async fn get_archive(
    State(state): State<AppState>,
    Path((repo, _refs)): Path<(String, String)>,
    request: ArchiveRequest,
) -> Result<impl IntoResponse> {
    let ArchiveRequest { params, filename } = request;
    let manifest = state
        .translator
        .translate_result(prepare(state.backend.as_ref(), &repo, params, filename))?;

    let disposition = content_disposition(&manifest.filename);
    Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(manifest)))
}

fn prepare(
    backend: &dyn ArchiveBackend,
    repo: &str,
    params: ArchiveParams,
    filename: String,
) -> anyhow::Result<ArchiveManifest> {
    params.format.validate()?;
    backend.prepare(repo, params, filename)
}

/// Control characters can't appear in a header value and quotes would end the
/// filename early.
fn content_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| if c == '"' || c == '\\' { '_' } else { c })
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}
