//! API route handlers.
//!
//! - `archive`: GET /api/v1/repos/{repo}/+/archive/{*refs}
//!
//! Handlers decompose the request, call the backend and run every failure
//! through the shared `Translator` before it becomes a response.

pub mod archive;

use std::sync::Arc;

use axum::Router;

use crate::git::ArchiveBackend;
use crate::translate::Translator;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ArchiveBackend>,
    pub translator: Arc<Translator>,
}

impl AppState {
    pub fn new(backend: Arc<dyn ArchiveBackend>, translator: Translator) -> Self {
        Self {
            backend,
            translator: Arc::new(translator),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new().merge(archive::routes(state))
}
