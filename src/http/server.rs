//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router around the catalog dispatcher
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind server to listener
//! - Serve until the shutdown signal fires

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::DefaultBodyLimit, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::catalog::CatalogStore;
use crate::config::ServiceConfig;
use crate::http::dispatch::dispatch;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::routing::Router as CatalogRouter;

pub type GuardedStore = Arc<Mutex<CatalogStore>>;

/// Application state injected into the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<CatalogRouter>,
    pub store: GuardedStore,
}

impl AppState {
    pub fn new(store: GuardedStore) -> Self {
        Self {
            router: Arc::new(CatalogRouter::catalog()),
            store,
        }
    }
}

/// HTTP server for the catalog API.
pub struct HttpServer {
    router: Router,
    store: GuardedStore,
}

impl HttpServer {
    /// Create a new HTTP server serving the given store.
    pub fn new(config: ServiceConfig, store: CatalogStore) -> Self {
        let store = Arc::new(Mutex::new(store));
        let state = AppState::new(store.clone());
        let router = build_router(&config, state);
        Self { router, store }
    }

    /// Run the server, accepting connections on the given listener until shutdown.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Shared handle to the catalog being served.
    pub fn store(&self) -> GuardedStore {
        self.store.clone()
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.limits.max_body_size))
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let mut store = CatalogStore::new();
        let artist = store.create_artist("Radiohead".into()).unwrap();
        store.create_album("OK Computer".into(), artist.artist_id).unwrap();
        let config = ServiceConfig::default();
        let state = AppState::new(Arc::new(Mutex::new(store)));
        build_router(&config, state)
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_artists() {
        let request = Request::builder().uri("/artists").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let body = read_json(response).await;
        assert_eq!(body, serde_json::json!([{"artistId": 1, "name": "Radiohead"}]));
    }

    #[tokio::test]
    async fn test_client_request_id_is_echoed() {
        let request = Request::builder()
            .uri("/artists/1")
            .header("x-request-id", "trace-me")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()["x-request-id"], "trace-me");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/artists")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\":"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("malformed JSON body"));
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_size = 16;
        let state = AppState::new(Arc::new(Mutex::new(CatalogStore::new())));
        let payload = r#"{"name":"a name that is far too long"}"#;
        let request = Request::builder()
            .method("POST")
            .uri("/artists")
            .header("content-type", "application/json")
            .header("content-length", payload.len().to_string())
            .body(Body::from(payload))
            .unwrap();
        let response = build_router(&config, state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_oversized_body_without_length_is_rejected() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_size = 16;
        let store = Arc::new(Mutex::new(CatalogStore::new()));
        let state = AppState::new(store.clone());
        // no content-length header, so the limit trips while buffering
        let request = Request::builder()
            .method("POST")
            .uri("/artists")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"a name that is far too long"}"#))
            .unwrap();
        let response = build_router(&config, state).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = read_json(response).await;
        assert!(body["error"].as_str().is_some());
        assert!(store.lock().unwrap().artists().is_empty());
    }
}
