//! Catalog handlers, one per route.
//!
//! Handlers are synchronous: the dispatcher calls them with the store
//! already locked, and each one runs to completion before the lock is
//! released. Body checks always happen before any mutation.

use crate::http::response::ApiError;

pub mod albums;
pub mod artists;
pub mod songs;

pub(crate) const ARTIST_NOT_FOUND: &str = "Artist not found";
pub(crate) const ALBUM_NOT_FOUND: &str = "Album not found";
pub(crate) const SONG_NOT_FOUND: &str = "Song not found";

/// A create that found its entity's counter exhausted.
pub(crate) fn ids_exhausted(entity: &str) -> ApiError {
    ApiError::Internal(format!("no {} IDs left to assign", entity))
}
