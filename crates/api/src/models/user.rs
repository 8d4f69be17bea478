//! User domain types.

use serde::Serialize;

use serene_essence_core::{Email, UserId};

/// A registered shopper.
///
/// This is the public view of a `users` row: the password digest is held
/// separately and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}
