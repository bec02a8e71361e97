//! Sentinels returned by the git remote-procedure layer.

use thiserror::Error;

use super::Classify;
use crate::error::UserError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcError {
    #[error("already exists")]
    AlreadyExists,

    #[error("invalid argument")]
    InvalidArgument,

    #[error("not found")]
    NotFound,

    #[error("precondition failed")]
    PreconditionFailed,

    #[error("not mergeable")]
    NotMergeable,
}

impl Classify for RpcError {
    fn classify(&self) -> UserError {
        match self {
            RpcError::AlreadyExists => UserError::duplicate(),
            RpcError::InvalidArgument => UserError::bad_request(),
            RpcError::NotFound => UserError::not_found(),
            RpcError::PreconditionFailed => UserError::precondition_failed(),
            RpcError::NotMergeable => UserError::not_mergeable(),
        }
    }
}
