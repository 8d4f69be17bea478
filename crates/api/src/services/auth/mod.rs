//! Authentication service.
//!
//! Provides email + password registration and login. Passwords are stored as
//! Argon2id PHC strings with a per-user random salt; verification uses the
//! constant-time comparison built into `argon2`.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use serene_essence_core::{Email, PasswordDigest};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// Presence of the fields is checked by the caller; this validates the
    /// email format, hashes the password and inserts the user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        let digest = hash_password(password)?;

        let user = self
            .users
            .create(name.trim(), &email, &digest)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no account uses the email.
    /// Returns `AuthError::IncorrectPassword` if the password does not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let (user, digest) = self
            .users
            .get_credentials(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        verify_password(password, &digest)?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user)
    }
}

/// Hash a password using Argon2id with a fresh random salt.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<PasswordDigest, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| PasswordDigest::new(hash.to_string()))
        .map_err(AuthError::PasswordHash)
}

/// Verify a password against a stored digest.
///
/// # Errors
///
/// Returns `AuthError::IncorrectPassword` on mismatch and
/// `AuthError::PasswordHash` if the stored digest cannot be parsed.
pub fn verify_password(password: &str, digest: &PasswordDigest) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(digest.as_str()).map_err(AuthError::PasswordHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(()),
        Err(argon2::password_hash::Error::Password) => Err(AuthError::IncorrectPassword),
        Err(other) => Err(AuthError::PasswordHash(other)),
    }
}
