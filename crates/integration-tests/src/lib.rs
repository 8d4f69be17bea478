//! Integration tests for the Serene Essence API.
//!
//! # Running Tests
//!
//! ```bash
//! # Prepare the database and start the server
//! cargo run -p serene-essence-cli -- migrate
//! cargo run -p serene-essence-cli -- seed
//! cargo run -p serene-essence-api
//!
//! # In another shell
//! cargo test -p serene-essence-integration-tests -- --ignored
//! ```
//!
//! `API_BASE_URL` selects the server (default `http://localhost:5050`) and
//! `DATABASE_URL` the database the tests inspect directly.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

use serene_essence_core::UserId;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5050".to_string())
}

/// Plain HTTP client; the API has no sessions.
#[must_use]
pub fn client() -> Client {
    Client::new()
}

/// An email no previous run has registered.
#[must_use]
pub fn unique_email() -> String {
    format!("test-{}@serene-essence.test", Uuid::new_v4().simple())
}

/// Connect to the database the server is using.
pub async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgPool::connect(&url)
        .await
        .expect("Failed to connect to database")
}

/// Register a fresh user and return the `user` object from the response.
pub async fn register_user(client: &Client, email: &str, password: &str) -> Value {
    let resp = client
        .post(format!("{}/register", base_url()))
        .json(&json!({ "name": "Test Shopper", "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to register");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Invalid register body");
    body["user"].clone()
}

/// Save an address for `user_id` and return its id.
pub async fn create_address(client: &Client, user_id: UserId) -> i64 {
    let resp = client
        .post(format!("{}/save-address", base_url()))
        .json(&json!({
            "user_id": user_id,
            "full_name": "Test Shopper",
            "address_line": "1 Candle Row",
            "city": "Pune",
            "state": "MH",
            "zip_code": "411001",
            "phone_number": "9876543210"
        }))
        .send()
        .await
        .expect("Failed to save address");
    assert_eq!(resp.status(), StatusCode::OK);

    let addresses: Value = client
        .get(format!("{}/get-addresses/{user_id}", base_url()))
        .send()
        .await
        .expect("Failed to list addresses")
        .json()
        .await
        .expect("Invalid address list");

    addresses
        .as_array()
        .and_then(|list| list.last())
        .and_then(|address| address["id"].as_i64())
        .expect("Saved address not listed")
}

/// Extract the numeric user id from a `user` object.
#[must_use]
pub fn user_id(user: &Value) -> UserId {
    let id = user["id"].as_i64().expect("user.id missing");
    UserId::new(i32::try_from(id).expect("user.id out of range"))
}
