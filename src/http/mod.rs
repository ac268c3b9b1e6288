//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → dispatch.rs (buffer body, route, run handler)
//!     → body.rs (decode JSON / form fields)
//!     → response.rs (status codes, JSON error bodies)
//!     → Send to client
//! ```

pub mod body;
pub mod dispatch;
pub mod request;
pub mod response;
pub mod server;

pub use body::RequestBody;
pub use request::X_REQUEST_ID;
pub use response::ApiError;
pub use server::{build_router, AppState, HttpServer};
