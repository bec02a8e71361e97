//! Input validation failures.
//!
//! Unlike the sentinels, a validation failure carries its own message, which
//! is written for clients and surfaced unchanged with a 400 status.

use axum::http::StatusCode;
use thiserror::Error;

use super::Classify;
use crate::error::UserError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Classify for ValidationError {
    fn classify(&self) -> UserError {
        UserError::new(StatusCode::BAD_REQUEST, self.message.clone())
    }
}
