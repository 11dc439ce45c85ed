use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use ledger_core::DomainError;

/// Error returned by handlers, extractors and middleware; renders as
/// `{"error": message}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body missing, not JSON, or of the wrong shape.
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(err) => domain_error_to_response(err),
            ApiError::InvalidBody(rejection) => {
                tracing::debug!(status = %rejection.status(), "request body rejected");
                json_error(StatusCode::BAD_REQUEST, rejection.body_text())
            }
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> Response {
    let status = match err {
        DomainError::AccountNotFound
        | DomainError::DuplicateAccount
        | DomainError::InsufficientFunds => StatusCode::BAD_REQUEST,
    };
    json_error(status, err.to_string())
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}
