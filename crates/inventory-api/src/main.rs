//! Inventory API Server entry point
//!
//! Run with:
//! ```bash
//! DATABASE_URL=memory:// cargo run -p inventory-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use anyhow::Context;
use inventory_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before tracing so RUST_LOG and APP_ENV from it apply
    dotenvy::dotenv().ok();

    // Run the server
    if let Err(e) = run().await {
        error!(error = ?e, "Server failed to start");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(e) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {}", e);
            }
            return Err(e).context("Failed to load configuration");
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!("Starting Inventory API Server...");
    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    inventory_api::run(config)
        .await
        .context("Inventory API server stopped")?;

    Ok(())
}
