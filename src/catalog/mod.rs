//! In-memory catalog subsystem.
//!
//! # Data Flow
//! ```text
//! Seed fixtures (artists.json, albums.json, songs.json)
//!     → seed.rs (deserialize ID-keyed mappings)
//!     → store.rs (tables + per-entity ID counters)
//!     → shared as Arc<Mutex<CatalogStore>> with the dispatcher
//! ```
//!
//! # Design Decisions
//! - IDs are `u64` everywhere; path segments are converted before lookup
//! - Tables are ordered by ID, which is also insertion order
//! - No referential integrity: deletes never cascade
//! - The store never validates; handlers check before mutating

pub mod model;
pub mod seed;
pub mod store;

pub use model::{Album, Artist, Song, SongDetails, SongUpdate};
pub use seed::{load_seed, Seed, SeedError};
pub use store::CatalogStore;
