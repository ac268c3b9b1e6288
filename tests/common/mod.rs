//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use catalog_api::catalog::{load_seed, CatalogStore};
use catalog_api::config::{SeedConfig, ServiceConfig};
use catalog_api::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A running server plus the handle that stops it.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// The fixtures shipped in `seeds/`.
pub fn seed_config() -> SeedConfig {
    let root = env!("CARGO_MANIFEST_DIR");
    SeedConfig {
        artists_path: format!("{}/seeds/artists.json", root),
        albums_path: format!("{}/seeds/albums.json", root),
        songs_path: format!("{}/seeds/songs.json", root),
    }
}

/// Start a server on an ephemeral port, seeded from `seeds/`.
pub async fn start_seeded_server() -> TestServer {
    let store = CatalogStore::from_seed(load_seed(&seed_config()).unwrap());
    start_server(store).await
}

/// Start a server on an ephemeral port serving the given store.
pub async fn start_server(store: CatalogStore) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    TestServer {
        addr,
        shutdown,
        client,
    }
}
