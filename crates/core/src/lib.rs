//! Serene Essence Core - Shared domain types.
//!
//! This crate provides the types shared by the Serene Essence components:
//! - `api` - The HTTP backend (products, accounts, addresses, orders)
//! - `cli` - Offline tools for migrations, seeding and CSV import
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! `sqlx` encoding for `PostgreSQL` is available behind the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails, password digests and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
