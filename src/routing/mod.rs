//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (walk the route table top to bottom)
//!     → matcher.rs (evaluate method and path-shape conditions)
//!     → Return: first matching Route with its captured ID, or NoMatch
//! ```
//!
//! # Design Decisions
//! - Route table built once, immutable at runtime
//! - Path shapes compared segment by segment, no regex
//! - Deterministic: same input always matches same route
//! - First match wins (table order, not specificity)

pub mod matcher;
pub mod router;

pub use router::{Action, Route, RouteMatch, Router};
