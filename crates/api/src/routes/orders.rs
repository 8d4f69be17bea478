//! Order handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use serene_essence_core::{AddressId, DemoOrderStatus, OrderId, Price, ProductId, UserId};

use crate::error::{AppError, Result};
use crate::extract::ApiJson;
use crate::models::{CartItem, NewOrder};
use crate::services::orders::{OrderError, OrderService};
use crate::state::AppState;

/// Entry in the demo order listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DemoOrder {
    pub id: OrderId,
    pub total: Price,
    pub status: DemoOrderStatus,
}

/// Sample orders returned by `GET /orders`.
const DEMO_ORDERS: [DemoOrder; 2] = [
    DemoOrder {
        id: OrderId::new(1),
        total: Price::new(599),
        status: DemoOrderStatus::Delivered,
    },
    DemoOrder {
        id: OrderId::new(2),
        total: Price::new(849),
        status: DemoOrderStatus::Processing,
    },
];

/// Fixed sample list; not read from the `orders` table.
pub async fn index() -> Json<[DemoOrder; 2]> {
    Json(DEMO_ORDERS)
}

/// One cart line in `POST /place-order`. `id` is the product id.
#[derive(Debug, Deserialize)]
pub struct CartItemRequest {
    pub id: Option<ProductId>,
    pub quantity: Option<i32>,
    pub price: Option<Price>,
}

/// Body of `POST /place-order`.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub user_id: Option<UserId>,
    pub address_id: Option<AddressId>,
    pub items: Option<Vec<CartItemRequest>>,
    pub total: Option<Price>,
}

impl PlaceOrderRequest {
    fn into_new_order(self) -> Option<NewOrder> {
        let items = self
            .items?
            .into_iter()
            .map(|item| {
                Some(CartItem {
                    product_id: item.id?,
                    quantity: item.quantity?,
                    price: item.price?,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(NewOrder {
            user_id: self.user_id?,
            address_id: self.address_id?,
            items,
            total: self.total?,
        })
    }
}

/// Response for a committed order.
#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub message: &'static str,
    pub order_id: OrderId,
}

/// Place an order and its items in one transaction.
#[instrument(skip(state, body))]
pub async fn place(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PlaceOrderRequest>,
) -> Result<Json<PlaceOrderResponse>> {
    let order = body
        .into_new_order()
        .ok_or_else(|| AppError::BadRequest("Missing fields".to_string()))?;

    let placed = OrderService::new(state.pool())
        .place(&order)
        .await
        .map_err(|e| match e {
            OrderError::EmptyCart => AppError::BadRequest("Cart is empty".to_string()),
            OrderError::InvalidQuantity { .. } => {
                AppError::BadRequest("Quantity must be at least 1".to_string())
            }
            OrderError::Repository(e) => AppError::internal("Order failed", e),
        })?;

    Ok(Json(PlaceOrderResponse {
        message: "Order placed successfully",
        order_id: placed.id,
    }))
}
