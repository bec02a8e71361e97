//! Client-facing error type and HTTP response mapping.
//!
//! `UserError` is the only error representation that is ever written into an
//! HTTP response. It carries a status code and a short message and implements
//! Axum's `IntoResponse`, producing a JSON body of the form
//! `{"message": "..."}`.
//!
//! The predefined constructors cover the closed set of responses the
//! translator can produce:
//! - 400: `bad_request`, `primary_path_cant_be_deleted`, `path_too_long`,
//!   `no_change`, `cyclic_hierarchy`, `space_with_children_cant_be_deleted`
//! - 401 / 403: `unauthorized`, `forbidden`
//! - 404 / 409: `not_found`, `duplicate`
//! - 405: `webhook_not_retriggerable`
//! - 412: `precondition_failed`, `not_mergeable`
//! - 500: `internal`

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl UserError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden")
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found")
    }

    pub fn duplicate() -> Self {
        Self::new(StatusCode::CONFLICT, "Resource already exists")
    }

    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request")
    }

    pub fn precondition_failed() -> Self {
        Self::new(StatusCode::PRECONDITION_FAILED, "Precondition failed")
    }

    pub fn not_mergeable() -> Self {
        Self::new(StatusCode::PRECONDITION_FAILED, "Branch can't be merged")
    }

    pub fn primary_path_cant_be_deleted() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "The primary path of an object can't be deleted",
        )
    }

    pub fn path_too_long() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "The provided path is too long")
    }

    pub fn no_change() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "No Change")
    }

    pub fn cyclic_hierarchy() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Unable to perform the action as it would lead to a cyclic dependency",
        )
    }

    pub fn space_with_children_cant_be_deleted() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "The space can't be deleted as it still contains child spaces",
        )
    }

    pub fn webhook_not_retriggerable() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            "The webhook execution is incomplete and can't be retriggered",
        )
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal error occurred - Please contact operator for more information",
        )
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status.as_u16())
    }
}

impl std::error::Error for UserError {}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            message: &self.message,
        });

        (self.status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, UserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn into_response_writes_status_and_message() {
        let response = UserError::duplicate().into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Resource already exists" }));
    }

    #[test]
    fn display_includes_status_code() {
        assert_eq!(UserError::not_found().to_string(), "Not Found (404)");
    }
}
