//! Translation of internal failures into client-facing errors.
//!
//! `Translator::translate` is total: every `anyhow::Error` maps onto a
//! `UserError`. Rules are evaluated in order and the first match wins; each
//! rule looks at the whole error chain, so failures wrapped with
//! `anyhow::Context` or a `#[source]` field classify like bare ones.
//!
//! 1. A `UserError` anywhere in the chain is returned unchanged.
//! 2. A `ValidationError` becomes a 400 carrying its own message.
//! 3. Registered probes recognize subsystem sentinels (auth, store, gitrpc,
//!    webhook by default).
//! 4. Anything else is an internal error. The original text is handed to the
//!    `DiagnosticSink` and never reaches the client.

use std::sync::Arc;

use crate::error::{Result, UserError};
use crate::failure::{self, Classify, Probe, ValidationError, find};

/// Receives the failures the translator could not classify.
pub trait DiagnosticSink: Send + Sync {
    fn unclassified(&self, error: &anyhow::Error);
}

/// Default sink, writes a warning through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unclassified(&self, error: &anyhow::Error) {
        tracing::warn!("Unable to translate error: {:#}", error);
    }
}

pub struct Translator {
    probes: Vec<Probe>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl Translator {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            probes: failure::default_probes(),
            sink,
        }
    }

    /// Registers an additional subsystem probe, evaluated after the existing
    /// ones.
    pub fn with_probe(mut self, probe: Probe) -> Self {
        self.probes.push(probe);
        self
    }

    pub fn translate(&self, error: &anyhow::Error) -> UserError {
        if let Some(user_error) = find::<UserError>(error) {
            return user_error.clone();
        }

        if let Some(validation) = find::<ValidationError>(error) {
            return validation.classify();
        }

        if let Some(user_error) = self.probes.iter().find_map(|probe| probe(error)) {
            return user_error;
        }

        self.sink.unclassified(error);
        UserError::internal()
    }

    /// Passes successful results through untouched and classifies failures.
    pub fn translate_result<T>(&self, result: anyhow::Result<T>) -> Result<T> {
        result.map_err(|e| self.translate(&e))
    }
}
