//! Order placement service.

use sqlx::PgPool;
use thiserror::Error;

use crate::db::{OrderRepository, RepositoryError};
use crate::models::{NewOrder, PlacedOrder};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The cart has no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// A cart line has a zero or negative quantity.
    #[error("cart item {index} has invalid quantity {quantity}")]
    InvalidQuantity {
        /// Zero-based position of the line in the cart.
        index: usize,
        /// The rejected quantity.
        quantity: i32,
    },

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Places orders from validated carts.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }

    /// Check the cart and write the order with its items in one transaction.
    ///
    /// The client-submitted total is stored as-is; a mismatch with the sum of
    /// the lines is logged, not rejected.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::EmptyCart` or `OrderError::InvalidQuantity` for
    /// carts that cannot be placed, and `OrderError::Repository` if the
    /// transaction fails (in which case nothing was written).
    pub async fn place(&self, order: &NewOrder) -> Result<PlacedOrder, OrderError> {
        validate_cart(order)?;

        match order.computed_total() {
            Ok(computed) if computed != order.total => tracing::warn!(
                user_id = %order.user_id,
                submitted = %order.total,
                computed = %computed,
                "Order total does not match cart lines"
            ),
            Ok(_) => {}
            Err(e) => tracing::warn!(user_id = %order.user_id, error = %e, "Could not total cart"),
        }

        let placed = self.orders.create_with_items(order).await?;

        tracing::info!(
            order_id = %placed.id,
            user_id = %order.user_id,
            items = placed.item_count,
            "Order placed"
        );
        Ok(placed)
    }
}

/// Reject carts that can never be stored.
fn validate_cart(order: &NewOrder) -> Result<(), OrderError> {
    if order.items.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    if let Some((index, item)) = order
        .items
        .iter()
        .enumerate()
        .find(|(_, item)| item.quantity <= 0)
    {
        return Err(OrderError::InvalidQuantity {
            index,
            quantity: item.quantity,
        });
    }

    Ok(())
}
