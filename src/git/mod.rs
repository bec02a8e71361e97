pub mod archive;
pub mod repository;

pub use repository::GitRepository;

use crate::models::{ArchiveManifest, ArchiveParams};

/// Resolves decomposed archive requests against stored repositories.
///
/// Failures are reported with the sentinels from `crate::failure` so the
/// route can translate them; anything else ends up as an internal error.
pub trait ArchiveBackend: Send + Sync {
    fn prepare(
        &self,
        repository: &str,
        params: ArchiveParams,
        filename: String,
    ) -> anyhow::Result<ArchiveManifest>;
}
