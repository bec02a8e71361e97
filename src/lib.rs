//! HTTP boundary of a git hosting service.
//!
//! - `translate`: maps any internal failure onto a client-facing `UserError`
//! - `request`: decomposes archive URLs into `ArchiveParams`
//! - `failure`: closed sentinel taxonomy returned by the subsystems
//! - `git`, `routes`: the archive endpoint and its git2-backed resolver

pub mod error;
pub mod failure;
pub mod git;
pub mod models;
pub mod request;
pub mod routes;
pub mod translate;

pub use error::UserError;
pub use translate::Translator;
