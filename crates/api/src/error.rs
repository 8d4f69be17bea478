//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. The response body is always
//! `{"error": "<message>"}`; for server errors the message is a fixed,
//! client-safe string and the underlying cause is logged (and sent to Sentry
//! when configured) instead of being returned.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Boxed error kept as the cause of an internal failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request from client (missing or malformed fields).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique constraint hit (e.g. email already registered).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Credentials did not match.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Request body was not acceptable JSON.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    /// Path segment could not be parsed (e.g. `/products/abc`).
    #[error("Invalid path: {0}")]
    Path(#[from] PathRejection),

    /// Persistence or other unexpected failure.
    #[error("{message}: {source}")]
    Internal {
        /// Message returned to the client.
        message: &'static str,
        /// Underlying cause, logged only.
        source: BoxError,
    },
}

impl AppError {
    /// Wrap an unexpected failure with the message the client should see.
    pub fn internal(message: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Internal {
            message,
            source: source.into(),
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::Path(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Json(rejection) => rejection.status(),
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients.
    fn client_message(&self) -> String {
        match self {
            Self::BadRequest(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::Unauthorized(msg) => msg.clone(),
            Self::Json(rejection) => rejection.body_text(),
            Self::Path(_) => "Not found".to_string(),
            Self::Internal { message, .. } => (*message).to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal { message, source } => {
                let event_id = sentry::capture_error(source.as_ref());
                tracing::error!(
                    error = %source,
                    sentry_event_id = %event_id,
                    "{message}"
                );
            }
            Self::Json(_) | Self::Path(_) => tracing::debug!(error = %self, "Rejected request"),
            _ => {}
        }

        let status = self.status();
        let body = Json(json!({ "error": self.client_message() }));

        (status, body).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Product not found".to_string());
        assert_eq!(err.to_string(), "Not found: Product not found");

        let err = AppError::internal("Order failed", std::io::Error::other("connection reset"));
        assert_eq!(err.to_string(), "Order failed: connection reset");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::BadRequest("Missing fields".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::NotFound("User not found".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Conflict("Email already exists".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Unauthorized("Incorrect password".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::internal("Login failed", "boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let err = AppError::internal(
            "Registration failed",
            std::io::Error::other("password authentication failed for user postgres"),
        );
        let json = body_json(err.into_response()).await;

        assert_eq!(json, json!({ "error": "Registration failed" }));
    }

    #[tokio::test]
    async fn test_client_error_body() {
        let json = body_json(AppError::Conflict("Email already exists".into()).into_response()).await;
        assert_eq!(json["error"], "Email already exists");
    }
}
