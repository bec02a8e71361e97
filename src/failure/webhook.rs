use thiserror::Error;

use super::Classify;
use crate::error::UserError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookError {
    #[error("webhook execution is not retriggerable")]
    NotRetriggerable,
}

impl Classify for WebhookError {
    fn classify(&self) -> UserError {
        match self {
            WebhookError::NotRetriggerable => UserError::webhook_not_retriggerable(),
        }
    }
}
