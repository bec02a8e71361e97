//! Closed failure taxonomy shared with the subsystems behind the API.
//!
//! Each subsystem returns (or wraps) one of these sentinel enums instead of
//! its own ad-hoc errors:
//! - `auth`: `AuthError` (not authenticated / not authorized)
//! - `store`: `StoreError` (persistence conditions)
//! - `gitrpc`: `RpcError` (git remote-procedure conditions)
//! - `webhook`: `WebhookError` (webhook delivery conditions)
//! - `validation`: `ValidationError`, whose message is safe to show clients
//!
//! Every sentinel knows which client-facing response it stands for through
//! the `Classify` capability, so the translator never has to name
//! subsystem variants itself.
//!
//! A sentinel must be the error *object*, with any detail attached as context:
//! `anyhow::Error::new(RpcError::NotFound).context(detail)`. Attached the other
//! way round it is only visible at the top level and is lost once the error
//! sits behind another error's `#[source]`.

pub mod auth;
pub mod gitrpc;
pub mod store;
pub mod validation;
pub mod webhook;

pub use auth::AuthError;
pub use gitrpc::RpcError;
pub use store::StoreError;
pub use validation::ValidationError;
pub use webhook::WebhookError;

use std::error::Error as StdError;
use std::fmt::{Debug, Display};

use crate::error::UserError;

/// A failure that maps onto exactly one client-facing response.
pub trait Classify {
    fn classify(&self) -> UserError;
}

/// Recognizes one subsystem's sentinels in an error.
pub type Probe = fn(&anyhow::Error) -> Option<UserError>;

/// Builds a probe for the sentinel type `T`.
///
/// Matching is by type and variant, never by message text, so two
/// subsystems reporting the same wording can't be confused.
pub fn probe<T>(error: &anyhow::Error) -> Option<UserError>
where
    T: Classify + Display + Debug + Send + Sync + StdError + 'static,
{
    find::<T>(error).map(Classify::classify)
}

/// Finds the first `T` in `error`, whether it was attached as context or sits
/// behind a `source()` link.
pub fn find<T>(error: &anyhow::Error) -> Option<&T>
where
    T: Display + Debug + Send + Sync + StdError + 'static,
{
    error
        .downcast_ref::<T>()
        .or_else(|| error.chain().find_map(|link| link.downcast_ref::<T>()))
}

/// Probes for the built-in subsystems, grouped in table order.
pub fn default_probes() -> Vec<Probe> {
    vec![
        probe::<AuthError> as Probe,
        probe::<StoreError>,
        probe::<RpcError>,
        probe::<WebhookError>,
    ]
}
