//! Registration and login handlers.
//!
//! Successful calls return the public user view; no session or token is
//! issued.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::User;
use crate::routes::non_blank;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body returned by both register and login.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: &'static str,
    pub user: User,
}

/// Register a new user.
#[instrument(skip(state, body))]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let (Some(name), Some(email), Some(password)) = (
        non_blank(body.name),
        non_blank(body.email),
        non_blank(body.password),
    ) else {
        return Err(AppError::BadRequest("Missing fields".to_string()));
    };

    let user = AuthService::new(state.pool())
        .register(&name, &email, &password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidEmail(_) => AppError::BadRequest("Missing fields".to_string()),
            AuthError::UserAlreadyExists => AppError::Conflict("Email already exists".to_string()),
            other => AppError::internal("Registration failed", other),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            message: "User registered successfully",
            user,
        }),
    ))
}

/// Check credentials.
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<UserResponse>> {
    let (Some(email), Some(password)) = (non_blank(body.email), non_blank(body.password)) else {
        return Err(AppError::BadRequest("Missing email or password".to_string()));
    };

    let user = AuthService::new(state.pool())
        .login(&email, &password)
        .await
        .map_err(|e| match e {
            // An address that cannot be stored cannot belong to anyone.
            AuthError::InvalidEmail(_) | AuthError::UserNotFound => {
                AppError::NotFound("User not found".to_string())
            }
            AuthError::IncorrectPassword => AppError::Unauthorized("Incorrect password".to_string()),
            other => AppError::internal("Login failed", other),
        })?;

    Ok(Json(UserResponse {
        message: "Login successful",
        user,
    }))
}
