//! Liveness and readiness handlers.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Banner served at `/`.
pub async fn index() -> &'static str {
    "🕯️ Serene Essence Backend Running!"
}

/// Smoke-test endpoint used by the frontend deploy check.
pub async fn test() -> &'static str {
    tracing::debug!("Test route hit");
    "Test successful"
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the database is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
