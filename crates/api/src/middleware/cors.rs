//! Cross-origin policy for the browser frontend.

use axum::http::{Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ApiConfig;

/// Build the CORS layer.
///
/// With no configured origins every origin is allowed; otherwise only the
/// listed origins are echoed back.
#[must_use]
pub fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_allowed_origins.clone()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
