//! Catalog product types.

use serde::{Deserialize, Serialize};

use serene_essence_core::{Price, ProductId};

/// A catalog product as served by `GET /products`.
///
/// Field names match what the shop frontend expects, including the
/// camel-cased `deliveryDays`.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub description: String,
    pub rating: f32,
    #[serde(rename = "deliveryDays")]
    pub delivery_days: i32,
    pub category: String,
}

/// A product to be inserted by the seed or import commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub image: String,
    pub description: String,
    pub rating: f32,
    #[serde(rename = "deliveryDays")]
    pub delivery_days: i32,
    pub category: String,
}
