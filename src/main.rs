//! Issue tracker service entry point.

use std::path::Path;

use tokio::net::TcpListener;

use issue_tracker::config::loader::load_config;
use issue_tracker::lifecycle::signals;
use issue_tracker::observability::{logging, metrics};
use issue_tracker::{HttpServer, IssueStore, ServerConfig, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; an optional path argument selects a TOML file.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ServerConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("issue-tracker v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        database_url = %config.database.url,
        default_project = %config.api.default_project,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Open the store once; handlers share the pool.
    let store = IssueStore::connect(&config.database).await?;

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Graceful shutdown on Ctrl+C
    let shutdown = Shutdown::new();
    tokio::spawn(signals::listen(shutdown.clone()));

    // Create and run HTTP server
    let server = HttpServer::new(&config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
