//! In-memory music catalog API: artists, albums and songs over HTTP/JSON.

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use catalog::CatalogStore;
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
