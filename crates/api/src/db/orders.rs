//! Order repository.
//!
//! An order and its items are written as one unit: the order row is
//! inserted first to obtain its id, each cart line is inserted against that
//! id, and only then is the transaction committed.

use sqlx::{PgConnection, PgPool};

use serene_essence_core::{OrderId, OrderItemId};

use super::RepositoryError;
use crate::models::{CartItem, NewOrder, PlacedOrder};

/// Repository for order placement.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Write an order and all of its items atomically.
    ///
    /// On any failure after `BEGIN` the transaction is rolled back
    /// explicitly before the error is returned, so no partial order is ever
    /// visible.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails (unknown
    /// user or address, constraint violations, connection loss).
    pub async fn create_with_items(&self, order: &NewOrder) -> Result<PlacedOrder, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        match insert_order(&mut *tx, order).await {
            Ok(placed) => {
                tx.commit().await?;
                Ok(placed)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "Order rollback failed");
                }
                Err(e)
            }
        }
    }
}

async fn insert_order(
    conn: &mut PgConnection,
    order: &NewOrder,
) -> Result<PlacedOrder, RepositoryError> {
    let (order_id,): (OrderId,) = sqlx::query_as(
        r"
        INSERT INTO orders (user_id, address_id, total_price)
        VALUES ($1, $2, $3)
        RETURNING id
        ",
    )
    .bind(order.user_id)
    .bind(order.address_id)
    .bind(order.total)
    .fetch_one(&mut *conn)
    .await?;

    for item in &order.items {
        insert_item(&mut *conn, order_id, item).await?;
    }

    Ok(PlacedOrder {
        id: order_id,
        item_count: order.items.len(),
    })
}

async fn insert_item(
    conn: &mut PgConnection,
    order_id: OrderId,
    item: &CartItem,
) -> Result<OrderItemId, RepositoryError> {
    let (id,): (OrderItemId,) = sqlx::query_as(
        r"
        INSERT INTO order_items (order_id, product_id, quantity, price)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        ",
    )
    .bind(order_id)
    .bind(item.product_id)
    .bind(item.quantity)
    .bind(item.price)
    .fetch_one(conn)
    .await?;

    Ok(id)
}
