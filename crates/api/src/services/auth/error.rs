//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] serene_essence_core::EmailError),

    /// No account is registered under the email.
    #[error("user not found")]
    UserNotFound,

    /// The account exists but the password does not match.
    #[error("incorrect password")]
    IncorrectPassword,

    /// An account with the email already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error, or a stored digest that cannot be parsed.
    #[error("password hashing error: {0}")]
    PasswordHash(argon2::password_hash::Error),
}
