//! Order placement types.

use serene_essence_core::{AddressId, OrderId, Price, PriceError, ProductId, UserId};

/// One line of a submitted cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i32,
    /// Unit price the client saw.
    pub price: Price,
}

impl CartItem {
    /// `price * quantity` for this line.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Overflow` if the line total does not fit.
    pub fn line_total(&self) -> Result<Price, PriceError> {
        self.price.times(self.quantity)
    }
}

/// An order to be written, with its cart lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub address_id: AddressId,
    pub items: Vec<CartItem>,
    /// Total as submitted by the client.
    pub total: Price,
}

impl NewOrder {
    /// Sum of all line totals.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Overflow` if any line or the sum does not fit.
    pub fn computed_total(&self) -> Result<Price, PriceError> {
        self.items
            .iter()
            .map(CartItem::line_total)
            .try_fold(Price::ZERO, |acc, line| acc.checked_add(line?))
    }
}

/// Result of a committed order placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedOrder {
    pub id: OrderId,
    pub item_count: usize,
}
