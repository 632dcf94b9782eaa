//! Waitlist error types with HTTP status code mapping.
//!
//! [`WaitlistError`] is the central error type for the service. Validation
//! and storage failures stay distinct in logs, but on the wire they both
//! collapse to the same generic `400` body that the sign-up form expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ValidationErrors;

/// Message returned for every rejected submission.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request data";

/// Message returned for unexpected server failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Structured JSON error response body.
///
/// ```json
/// { "error": "Invalid request data" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Generic, user-facing error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    /// Submission failed schema validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Request body was not parseable JSON.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Storage backend failure (connection loss, query error, corrupt row).
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WaitlistError {
    /// Returns the HTTP status code for this variant.
    ///
    /// Storage failures map to `400` like validation failures; the sign-up
    /// client only distinguishes success from "invalid data".
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) | Self::Storage(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns `true` if the failure was caused by the submitted data
    /// rather than by the server or its storage.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::MalformedBody(_))
    }

    /// Returns the generic message sent to the client for this variant.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE,
            _ => INVALID_REQUEST_MESSAGE,
        }
    }
}

impl From<sqlx::Error> for WaitlistError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl IntoResponse for WaitlistError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::validate_submission;

    async fn body_json(err: WaitlistError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("failed to read body");
        };
        let Ok(value) = serde_json::from_slice(&bytes) else {
            panic!("body is not json");
        };
        (status, value)
    }

    #[tokio::test]
    async fn validation_error_renders_generic_400() {
        let Err(errors) = validate_submission(&serde_json::json!({})) else {
            panic!("expected validation failure");
        };
        let (status, body) = body_json(WaitlistError::from(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Invalid request data" }));
    }

    #[tokio::test]
    async fn storage_errors_collapse_to_same_400() {
        let (status, body) = body_json(WaitlistError::Storage("connection refused".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Invalid request data" }));
    }

    #[tokio::test]
    async fn internal_error_renders_500() {
        let (status, body) = body_json(WaitlistError::Internal("boom".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }

    #[test]
    fn client_error_classification() {
        assert!(WaitlistError::MalformedBody("eof".into()).is_client_error());
        assert!(!WaitlistError::Storage("down".into()).is_client_error());
    }
}
