use thiserror::Error;

use super::Classify;
use crate::error::UserError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("not authorized")]
    NotAuthorized,
}

impl Classify for AuthError {
    fn classify(&self) -> UserError {
        match self {
            AuthError::NotAuthenticated => UserError::unauthorized(),
            AuthError::NotAuthorized => UserError::forbidden(),
        }
    }
}
