//! End-to-end tests against a running API server and database.
//!
//! These tests require:
//! - A migrated and seeded `PostgreSQL` database (`se-cli migrate && se-cli seed`)
//! - The API server running (`cargo run -p serene-essence-api`)
//! - `DATABASE_URL` pointing at the same database

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::{Value, json};

use serene_essence_integration_tests::{
    base_url, client, create_address, pool, register_user, unique_email, user_id,
};

// ============================================================================
// Accounts
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_register_then_duplicate_is_conflict() {
    let client = client();
    let email = unique_email();

    let user = register_user(&client, &email, "pw123").await;
    assert_eq!(user["email"], email.as_str());
    assert!(user["id"].is_number());
    assert!(user.get("password").is_none());

    let resp = client
        .post(format!("{}/register", base_url()))
        .json(&json!({ "name": "Someone Else", "email": email, "password": "other" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_email_is_case_insensitive() {
    let client = client();
    let email = unique_email();
    register_user(&client, &email, "pw123").await;

    let resp = client
        .post(format!("{}/register", base_url()))
        .json(&json!({ "name": "Shouty", "email": email.to_uppercase(), "password": "pw123" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_login_wrong_then_right_password() {
    let client = client();
    let email = unique_email();
    let user = register_user(&client, &email, "pw123").await;

    let resp = client
        .post(format!("{}/login", base_url()))
        .json(&json!({ "email": email, "password": "pw124" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .post(format!("{}/login", base_url()))
        .json(&json!({ "email": email, "password": "pw123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"], user);
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_login_unknown_user() {
    let resp = client()
        .post(format!("{}/login", base_url()))
        .json(&json!({ "email": unique_email(), "password": "pw123" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_product_lookup_matches_listing() {
    let client = client();

    let products: Vec<Value> = client
        .get(format!("{}/products", base_url()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let first = products.first().expect("catalog is empty; run se-cli seed");

    let product: Value = client
        .get(format!("{}/products/{}", base_url(), first["id"]))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(&product, first);
    assert!(product["deliveryDays"].is_number());
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_missing_product_is_not_found() {
    let resp = client()
        .get(format!("{}/products/{}", base_url(), i32::MAX))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Product not found");
}

// ============================================================================
// Addresses
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_new_user_has_no_addresses() {
    let client = client();
    let user = register_user(&client, &unique_email(), "pw123").await;

    let resp = client
        .get(format!("{}/get-addresses/{}", base_url(), user_id(&user)))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_address_for_unknown_user_fails() {
    let resp = client()
        .post(format!("{}/save-address", base_url()))
        .json(&json!({
            "user_id": i32::MAX,
            "full_name": "Nobody",
            "address_line": "0 Void St",
            "city": "Nowhere",
            "state": "NA",
            "zip_code": 0,
            "phone_number": 0
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Address save failed");
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_order_writes_one_row_per_item() {
    let client = client();
    let user = register_user(&client, &unique_email(), "pw123").await;
    let user_id = user_id(&user);
    let address_id = create_address(&client, user_id).await;

    let resp = client
        .post(format!("{}/place-order", base_url()))
        .json(&json!({
            "user_id": user_id,
            "address_id": address_id,
            "items": [
                { "id": 1, "quantity": 2, "price": 250 },
                { "id": 2, "quantity": 1, "price": 200 },
                { "id": 3, "quantity": 1, "price": 300 }
            ],
            "total": 1000
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Order placed successfully");
    let order_id = i32::try_from(body["order_id"].as_i64().unwrap()).unwrap();

    let pool = pool().await;
    let (orders,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders WHERE user_id = $1")
        .bind(user_id.as_i32())
        .fetch_one(&pool)
        .await
        .unwrap();
    let (items,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM order_items WHERE order_id = $1")
        .bind(order_id)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(orders, 1);
    assert_eq!(items, 3);
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_failed_item_rolls_back_order() {
    let client = client();
    let user = register_user(&client, &unique_email(), "pw123").await;
    let user_id = user_id(&user);
    let address_id = create_address(&client, user_id).await;

    // The second line violates the price check after the order row exists.
    let resp = client
        .post(format!("{}/place-order", base_url()))
        .json(&json!({
            "user_id": user_id,
            "address_id": address_id,
            "items": [
                { "id": 1, "quantity": 1, "price": 250 },
                { "id": 2, "quantity": 1, "price": -200 }
            ],
            "total": 50
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Order failed");

    let (orders,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders WHERE user_id = $1")
        .bind(user_id.as_i32())
        .fetch_one(&pool().await)
        .await
        .unwrap();
    assert_eq!(orders, 0);
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_demo_order_list() {
    let body: Value = client()
        .get(format!("{}/orders", base_url()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body[0]["status"], "Delivered");
    assert_eq!(body[1]["total"], 849);
}
