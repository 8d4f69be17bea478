//! Sample catalog data.

use sqlx::PgPool;

use serene_essence_api::db::{ProductRepository, RepositoryError};
use serene_essence_api::models::NewProduct;
use serene_essence_core::Price;

/// The three candles the shop launched with.
fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Lavender Bliss".to_string(),
            price: Price::new(250),
            image: "serene-essence/public/images/lavender.jpeg".to_string(),
            description: "Relaxing lavender scent".to_string(),
            rating: 4.5,
            delivery_days: 3,
            category: "floral".to_string(),
        },
        NewProduct {
            name: "Vanilla Dreams".to_string(),
            price: Price::new(200),
            image: "serene-essence/public/images/citrius.jpeg".to_string(),
            description: "Cozy vanilla warmth".to_string(),
            rating: 4.7,
            delivery_days: 4,
            category: "sweet".to_string(),
        },
        NewProduct {
            name: "Citrus Sunset".to_string(),
            price: Price::new(300),
            image: "https://images.unsplash.com/photo-1630326838381-87e62c6b4531".to_string(),
            description: "Fresh citrus burst".to_string(),
            rating: 4.3,
            delivery_days: 2,
            category: "citrus".to_string(),
        },
    ]
}

/// Insert the sample products unless the catalog already has rows.
///
/// # Errors
///
/// Returns `RepositoryError` if the count or the inserts fail.
pub async fn run(pool: &PgPool) -> Result<(), RepositoryError> {
    let products = ProductRepository::new(pool);

    let existing = products.count().await?;
    if existing > 0 {
        tracing::info!(existing, "Catalog already populated, skipping seed");
        return Ok(());
    }

    let ids = products.insert_many(&sample_products()).await?;
    tracing::info!(inserted = ids.len(), "Seeded sample products");
    Ok(())
}
