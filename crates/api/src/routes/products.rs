//! Product catalog handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use serene_essence_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::extract::ApiPath;
use crate::models::Product;
use crate::state::AppState;

/// List every product.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .list_all()
        .await
        .map_err(|e| AppError::internal("Failed to fetch products", e))?;

    tracing::debug!(count = products.len(), "Products fetched");
    Ok(Json(products))
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProductId>,
) -> Result<Json<Product>> {
    ProductRepository::new(state.pool())
        .get_by_id(id)
        .await
        .map_err(|e| AppError::internal("Internal server error", e))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}
