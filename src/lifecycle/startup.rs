//! Startup orchestration.
//!
//! # Responsibilities
//! - Load seed fixtures into a fresh store
//! - Bind the listener last, so traffic only arrives when ready
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use thiserror::Error;
use tokio::net::TcpListener;

use crate::catalog::{load_seed, CatalogStore, SeedError};
use crate::config::ServiceConfig;
use crate::http::HttpServer;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load seed data: {0}")]
    Seed(#[from] SeedError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
}

/// Build the server and its bound listener from a validated config.
pub async fn bootstrap(config: ServiceConfig) -> Result<(HttpServer, TcpListener), StartupError> {
    let seed = load_seed(&config.seeds)?;
    let store = CatalogStore::from_seed(seed);

    let (artists, albums, songs) = store.counts();
    tracing::info!(artists, albums, songs, "Catalog ready");

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    Ok((HttpServer::new(config, store), listener))
}
