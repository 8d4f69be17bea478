//! Domain models for the shop.
//!
//! These types are what handlers return as JSON and what repositories
//! produce from rows. Password digests never appear here; see
//! [`crate::db::users`].

pub mod address;
pub mod order;
pub mod product;
pub mod user;

pub use address::{Address, NewAddress};
pub use order::{CartItem, NewOrder, PlacedOrder};
pub use product::{NewProduct, Product};
pub use user::User;
