//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Registration and password login
//! - `orders` - Cart validation and order placement

pub mod auth;
pub mod orders;
