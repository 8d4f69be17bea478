//! Status enums.

use serde::{Deserialize, Serialize};

/// Fulfillment status shown by the demo order listing.
///
/// `GET /orders` is not backed by the `orders` table yet; it returns a fixed
/// sample so the frontend order page has something to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemoOrderStatus {
    Processing,
    Delivered,
}
