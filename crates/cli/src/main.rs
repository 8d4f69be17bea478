//! Serene Essence CLI - Database migrations and catalog management.
//!
//! # Usage
//!
//! ```bash
//! # Create or update the schema
//! se-cli migrate
//!
//! # Insert the sample candles into an empty catalog
//! se-cli seed
//!
//! # Bulk import products from a CSV export
//! se-cli import Serene-essence-products.csv
//! ```
//!
//! All commands read `DATABASE_URL` (a `.env` file is honoured).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "se-cli")]
#[command(author, version, about = "Serene Essence CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert the sample products if the catalog is empty
    Seed,
    /// Import products from a CSV file
    Import {
        /// CSV with headers name,price,image,description,rating,deliveryDays,category
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "se_cli=info,serene_essence_api=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let pool = commands::connect().await?;

    match cli.command {
        Commands::Migrate => commands::migrate::run(&pool).await?,
        Commands::Seed => commands::seed::run(&pool).await?,
        Commands::Import { file } => commands::import::run(&pool, &file).await?,
    }
    Ok(())
}
