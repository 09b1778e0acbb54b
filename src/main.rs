//! # Marketplace API Main Entry Point
//!
//! This is the main entry point for the Vehicle Service Marketplace API.

use marketplace::migration::{Migrator, MigratorTrait};
use marketplace::{config::ConfigLoader, db, server::run_server, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    telemetry::init_tracing(&config)?;

    tracing::info!(profile = %config.profile, "loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "effective configuration");
    }

    // Connect and bring the schema up to date before serving traffic
    let pool = db::init_pool(&config).await?;
    Migrator::up(&pool, None).await?;

    run_server(config, pool).await
}
