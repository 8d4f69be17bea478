//! Subcommand implementations.

pub mod import;
pub mod migrate;
pub mod seed;

use sqlx::PgPool;

use serene_essence_api::config::ApiConfig;
use serene_essence_api::db;

/// Connect using the same environment as the API server.
pub async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;
    let pool = db::create_pool(&config.database_url, config.max_connections).await?;
    tracing::info!("Connected to database");
    Ok(pool)
}
