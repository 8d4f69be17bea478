//! Serene Essence API library.
//!
//! JSON backend for the candle shop: catalog reads, account registration and
//! login, shipping addresses, and order placement over `PostgreSQL`.
//! The binary in `main.rs` wires telemetry around [`app`]; tests build the
//! same router against a lazily-connected pool.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;

use state::AppState;

/// Build the application router with its middleware stack.
pub fn app(state: AppState) -> Router {
    let cors = middleware::cors_layer(state.config());

    routes::routes()
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(middleware::trace_layer())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::config::ApiConfig;
    use crate::middleware::REQUEST_ID_HEADER;

    /// Router backed by a pool that never connects; only routes that answer
    /// before touching the database can be exercised here.
    fn test_app() -> Router {
        let config =
            ApiConfig::from_lookup(|key| (key == "DATABASE_URL").then(|| "postgres://localhost/serene".to_string()))
                .unwrap();
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/serene")
            .unwrap();
        app(AppState::new(config, pool))
    }

    async fn get(uri: &str) -> Response {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(uri: &str, body: &Value) -> Response {
        test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_banner_and_smoke_routes() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "🕯️ Serene Essence Backend Running!");

        assert_eq!(body_text(get("/test").await).await, "Test successful");
        assert_eq!(body_text(get("/health").await).await, "ok");
    }

    #[tokio::test]
    async fn test_demo_orders() {
        let response = get("/orders").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([
                {"id": 1, "total": 599, "status": "Delivered"},
                {"id": 2, "total": 849, "status": "Processing"}
            ])
        );
    }

    #[tokio::test]
    async fn test_non_numeric_ids_are_not_found() {
        let response = get("/products/lavender").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Not found"}));

        assert_eq!(get("/get-addresses/me").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let response = post_json("/register", &json!({"name": "Ana", "email": "ana@x.com"})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Missing fields"}));

        let response = post_json(
            "/register",
            &json!({"name": "", "email": "ana@x.com", "password": "pw123"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let response = post_json(
            "/register",
            &json!({"name": "Ana", "email": "ana.x.com", "password": "pw123"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let response = post_json("/login", &json!({"email": "ana@x.com"})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Missing email or password"})
        );
    }

    #[tokio::test]
    async fn test_save_address_missing_fields() {
        let response = post_json("/save-address", &json!({"user_id": 1, "full_name": "Ana"})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Missing fields"}));
    }

    #[tokio::test]
    async fn test_place_order_rejections() {
        let response = post_json("/place-order", &json!({"user_id": 1})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = post_json(
            "/place-order",
            &json!({"user_id": 1, "address_id": 1, "items": [], "total": 0}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Cart is empty"}));

        let response = post_json(
            "/place-order",
            &json!({
                "user_id": 1,
                "address_id": 1,
                "items": [{"id": 1, "quantity": 0, "price": 250}],
                "total": 0
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_json_error() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"email\": "))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/register")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let response = get("/health").await;
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin_by_default() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/products")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
