//! Bulk product import from CSV.
//!
//! The file must have the header row
//! `name,price,image,description,rating,deliveryDays,category`. Every row is
//! parsed and checked before anything is written; the rows are then inserted
//! in a single transaction.

use std::io::Read;
use std::path::Path;

use sqlx::PgPool;
use thiserror::Error;

use serene_essence_api::db::{ProductRepository, RepositoryError};
use serene_essence_api::models::NewProduct;

/// Errors that abort an import.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {message}")]
    Row { line: u64, message: String },

    #[error("no products found")]
    Empty,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Import every product in `path`.
///
/// # Errors
///
/// Returns `ImportError` if the file cannot be read, any row is invalid, or
/// the insert transaction fails. Nothing is written unless every row is valid.
pub async fn run(pool: &PgPool, path: &Path) -> Result<(), ImportError> {
    let file = std::fs::File::open(path).map_err(|source| ImportError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let products = parse_products(file)?;
    tracing::info!(path = %path.display(), rows = products.len(), "Parsed product CSV");

    let ids = ProductRepository::new(pool).insert_many(&products).await?;
    tracing::info!(inserted = ids.len(), "Products imported");
    Ok(())
}

/// Parse and validate all rows.
fn parse_products<R: Read>(input: R) -> Result<Vec<NewProduct>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let mut products = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);

        let product: NewProduct = record
            .deserialize(Some(&headers))
            .map_err(|e| ImportError::Row {
                line,
                message: e.to_string(),
            })?;

        validate(&product).map_err(|message| ImportError::Row {
            line,
            message: message.to_string(),
        })?;

        products.push(product);
    }

    if products.is_empty() {
        return Err(ImportError::Empty);
    }

    Ok(products)
}

fn validate(product: &NewProduct) -> Result<(), &'static str> {
    if product.name.is_empty() {
        return Err("name is empty");
    }
    if product.price.is_negative() {
        return Err("price is negative");
    }
    if !(0.0..=5.0).contains(&product.rating) {
        return Err("rating must be between 0 and 5");
    }
    if product.delivery_days < 0 {
        return Err("deliveryDays is negative");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serene_essence_core::Price;

    use super::*;

    const HEADER: &str = "name,price,image,description,rating,deliveryDays,category\n";

    fn parse(rows: &str) -> Result<Vec<NewProduct>, ImportError> {
        parse_products(format!("{HEADER}{rows}").as_bytes())
    }

    #[test]
    fn test_parses_rows() {
        let products = parse(
            "Rose Garden, 275 ,rose.jpeg,Soft rose petals,4.6,3,floral\n\
             \"Amber, Oud\",450,amber.jpeg,\"Warm, smoky\",4.9,5,woody\n",
        )
        .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Rose Garden");
        assert_eq!(products[0].price, Price::new(275));
        assert_eq!(products[1].name, "Amber, Oud");
        assert_eq!(products[1].delivery_days, 5);
    }

    #[test]
    fn test_bad_number_reports_line() {
        let err = parse(
            "Rose Garden,275,rose.jpeg,Soft,4.6,3,floral\n\
             Pine Walk,cheap,pine.jpeg,Green,4.1,2,woody\n",
        )
        .unwrap_err();

        assert!(matches!(err, ImportError::Row { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = parse("Rose Garden,-5,rose.jpeg,Soft,4.6,3,floral\n").unwrap_err();
        assert!(matches!(err, ImportError::Row { line: 2, ref message } if message == "price is negative"));
    }

    #[test]
    fn test_rating_out_of_range() {
        let err = parse("Rose Garden,275,rose.jpeg,Soft,7.5,3,floral\n").unwrap_err();
        assert!(matches!(err, ImportError::Row { .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(matches!(parse(""), Err(ImportError::Empty)));
    }
}
