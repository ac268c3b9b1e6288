//! Music catalog API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http server ──▶ dispatch ──▶ routing table ──▶ handler
//!                     (trace, id,     (buffer +     (first match      │
//!                      limits)         decode)        wins)           ▼
//!     Client Response                                            catalog store
//!     ◀────────────── JSON / plain-text 404 ◀──────────────────── (Mutex)
//! ```
//!
//! Seed fixtures are loaded once at startup; all state is lost on exit.

use std::path::PathBuf;

use clap::Parser;

use catalog_api::config::{load_config, ServiceConfig};
use catalog_api::lifecycle::{bootstrap, Shutdown};
use catalog_api::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "In-memory music catalog API", long_about = None)]
struct Args {
    /// TOML config file. Without one, built-in defaults apply (port 5000, ./seeds).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("catalog-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let (server, listener) = bootstrap(config).await?;
    tracing::info!(address = %listener.local_addr()?, "Server is listening");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
