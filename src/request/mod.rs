//! Decomposition of inbound request URLs into typed parameters.
//!
//! - `archive`: splits `/+/archive/{*refs}` and its query string into
//!   `ArchiveParams`

pub mod archive;

pub use archive::{ArchiveRequest, parse_archive_params};
