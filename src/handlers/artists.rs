use tracing::info;

use crate::catalog::CatalogStore;
use crate::handlers::{ids_exhausted, ARTIST_NOT_FOUND};
use crate::http::body::RequestBody;
use crate::http::response::{created, deleted, non_empty, ok, ApiError, ApiResult};

const NAME_REQUIRED: &str = "Something wrong with the req body; name not found";

/// GET /artists
pub fn list(store: &CatalogStore) -> ApiResult {
    ok(store.artists())
}

/// GET /artists/:id
pub fn get(store: &CatalogStore, id: u64) -> ApiResult {
    match store.artist(id) {
        Some(artist) => ok(artist),
        None => Err(ApiError::NotFound(ARTIST_NOT_FOUND)),
    }
}

/// POST /artists
pub fn create(store: &mut CatalogStore, body: &RequestBody) -> ApiResult {
    let name = body.text("name").ok_or(ApiError::Validation(NAME_REQUIRED))?;
    let artist = store
        .create_artist(name.to_string())
        .ok_or_else(|| ids_exhausted("artist"))?;
    info!(artist_id = artist.artist_id, "Artist created");
    created(artist)
}

/// PUT|PATCH /artists/:id
pub fn update(store: &mut CatalogStore, id: u64, body: &RequestBody) -> ApiResult {
    if store.artist(id).is_none() {
        return Err(ApiError::NotFound(ARTIST_NOT_FOUND));
    }
    let name = body.text("name").ok_or(ApiError::Validation(NAME_REQUIRED))?;
    match store.update_artist(id, name.to_string()) {
        Some(artist) => ok(artist),
        None => Err(ApiError::NotFound(ARTIST_NOT_FOUND)),
    }
}

/// DELETE /artists/:id
pub fn delete(store: &mut CatalogStore, id: u64) -> ApiResult {
    match store.delete_artist(id) {
        Some(_) => {
            info!(artist_id = id, "Artist deleted");
            deleted()
        }
        None => Err(ApiError::NotFound(ARTIST_NOT_FOUND)),
    }
}

/// GET /artists/:id/albums
pub fn albums(store: &CatalogStore, id: u64) -> ApiResult {
    non_empty(store.albums_by_artist(id), "No albums by this artist found")
}

/// GET /artists/:id/songs
pub fn songs(store: &CatalogStore, id: u64) -> ApiResult {
    match store.songs_by_artist(id) {
        Some(songs) => ok(songs),
        None => Err(ApiError::NotFound("No songs by this artist found")),
    }
}
