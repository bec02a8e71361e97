//! Data transfer objects shared between request parsing, the archive backend
//! and API responses.
//! - `archive`: ArchiveFormat, ArchiveParams, ArchiveManifest

pub mod archive;

pub use archive::*;
