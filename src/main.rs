//! # Repository Recipe
//!
//! Console entry point: starts the [`RepositorySystem`] over the sample data, prints the
//! demo report to stdout and shuts the system down.
//!
//! Logs go to stderr; set `RUST_LOG=info` to see the actors at work next to the report.

use repository_recipe::datasource::InMemoryDataSource;
use repository_recipe::demo;
use repository_recipe::lifecycle::{setup_tracing, RepositorySystem, SystemConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(buffer_size = config.buffer_size, "Starting repository demo");

    let system = RepositorySystem::start(&config, InMemoryDataSource::sample());

    let stdout = std::io::stdout();
    let report = demo::run(&system, &mut stdout.lock()).await;
    if let Err(e) = &report {
        error!(error = %e, "Demo failed");
    }

    // Shutdown system gracefully
    system.shutdown().await.map_err(|e| e.to_string())?;
    report.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
