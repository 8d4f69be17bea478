//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Banner
//! GET  /test                     - Smoke test
//! GET  /health                   - Liveness
//! GET  /health/ready             - Readiness (database reachable)
//!
//! # Catalog
//! GET  /products                 - All products
//! GET  /products/{id}            - One product
//!
//! # Users
//! POST /register                 - Create account
//! POST /login                    - Check credentials
//!
//! # Addresses
//! POST /save-address             - Save a shipping address
//! GET  /get-addresses/{user_id}  - List a user's addresses
//!
//! # Orders
//! GET  /orders                   - Demo order list
//! POST /place-order              - Place an order
//! ```

pub mod addresses;
pub mod auth;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// `{"message": ...}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Treat absent and whitespace-only strings alike.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/test", get(home::test))
        .route("/health", get(home::health))
        .route("/health/ready", get(home::readiness))
        .nest("/products", product_routes())
        .route("/orders", get(orders::index))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/save-address", post(addresses::save))
        .route("/place-order", post(orders::place))
        .route("/get-addresses/{user_id}", get(addresses::list))
}
