use tracing::info;

use crate::catalog::CatalogStore;
use crate::handlers::{ids_exhausted, ALBUM_NOT_FOUND, ARTIST_NOT_FOUND};
use crate::http::body::RequestBody;
use crate::http::response::{created, deleted, non_empty, ok, ApiError, ApiResult};

const NAME_REQUIRED: &str = "Something wrong with the req body; name not found";

/// GET /albums/:id
pub fn get(store: &CatalogStore, id: u64) -> ApiResult {
    match store.album(id) {
        Some(album) => ok(album),
        None => Err(ApiError::NotFound(ALBUM_NOT_FOUND)),
    }
}

/// POST /artists/:id/albums
///
/// The name is checked first, then the artist; nothing is inserted unless both pass.
pub fn create(store: &mut CatalogStore, artist_id: u64, body: &RequestBody) -> ApiResult {
    let name = body.text("name").ok_or(ApiError::Validation(NAME_REQUIRED))?;
    if store.artist(artist_id).is_none() {
        return Err(ApiError::NotFound(ARTIST_NOT_FOUND));
    }
    let album = store
        .create_album(name.to_string(), artist_id)
        .ok_or_else(|| ids_exhausted("album"))?;
    info!(album_id = album.album_id, artist_id, "Album created");
    created(album)
}

/// PUT|PATCH /albums/:id
pub fn update(store: &mut CatalogStore, id: u64, body: &RequestBody) -> ApiResult {
    let name = body.text("name").ok_or(ApiError::Validation(NAME_REQUIRED))?;
    match store.update_album(id, name.to_string()) {
        Some(album) => ok(album),
        None => Err(ApiError::NotFound(ALBUM_NOT_FOUND)),
    }
}

/// DELETE /albums/:id
pub fn delete(store: &mut CatalogStore, id: u64) -> ApiResult {
    match store.delete_album(id) {
        Some(_) => {
            info!(album_id = id, "Album deleted");
            deleted()
        }
        None => Err(ApiError::NotFound(ALBUM_NOT_FOUND)),
    }
}

/// GET /albums/:id/songs
pub fn songs(store: &CatalogStore, id: u64) -> ApiResult {
    non_empty(store.songs_by_album(id), "No songs by this album found")
}
