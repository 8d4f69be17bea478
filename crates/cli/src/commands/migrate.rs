//! Schema migrations.
//!
//! Applies the SQL files in `crates/api/migrations/` that have not yet run.
//! Already-applied migrations are skipped, so the command is idempotent.

use sqlx::PgPool;
use sqlx::migrate::MigrateError;

use serene_essence_api::db::MIGRATOR;

/// Run all pending migrations.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or an applied migration was
/// modified after it ran.
pub async fn run(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!(
        available = MIGRATOR.iter().count(),
        "Running migrations"
    );

    MIGRATOR.run(pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
