use tracing::info;

use crate::catalog::{CatalogStore, SongUpdate};
use crate::handlers::{ids_exhausted, ALBUM_NOT_FOUND, SONG_NOT_FOUND};
use crate::http::body::RequestBody;
use crate::http::response::{created, deleted, non_empty, ok, ApiError, ApiResult};

const FIELDS_REQUIRED: &str =
    "Something wrong with the req body; name, lyrics and trackNumber are required";

/// The three fields a song write must carry.
struct SongFields {
    name: String,
    track_number: u32,
    lyrics: String,
}

/// Name and lyrics must be non-empty; track numbers start at 1.
fn required_fields(body: &RequestBody) -> Result<SongFields, ApiError> {
    let name = body.text("name").filter(|s| !s.is_empty());
    let lyrics = body.text("lyrics").filter(|s| !s.is_empty());
    let track_number = body
        .unsigned("trackNumber")
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n > 0);

    match (name, track_number, lyrics) {
        (Some(name), Some(track_number), Some(lyrics)) => Ok(SongFields {
            name: name.to_string(),
            track_number,
            lyrics: lyrics.to_string(),
        }),
        _ => Err(ApiError::Validation(FIELDS_REQUIRED)),
    }
}

/// GET /trackNumbers/:n/songs
pub fn by_track_number(store: &CatalogStore, track_number: u64) -> ApiResult {
    let songs = u32::try_from(track_number)
        .map(|n| store.songs_by_track_number(n))
        .unwrap_or_default();
    non_empty(songs, "No songs by this track number found")
}

/// GET /songs/:id
pub fn get(store: &CatalogStore, id: u64) -> ApiResult {
    match store.song_details(id) {
        Some(details) => ok(details),
        None => Err(ApiError::NotFound(SONG_NOT_FOUND)),
    }
}

/// POST /albums/:id/songs
pub fn create(store: &mut CatalogStore, album_id: u64, body: &RequestBody) -> ApiResult {
    let fields = required_fields(body)?;
    if store.album(album_id).is_none() {
        return Err(ApiError::NotFound(ALBUM_NOT_FOUND));
    }
    let song = store
        .create_song(fields.name, fields.track_number, album_id, fields.lyrics)
        .ok_or_else(|| ids_exhausted("song"))?;
    info!(song_id = song.song_id, album_id, "Song created");
    created(song)
}

/// PUT|PATCH /songs/:id
pub fn update(store: &mut CatalogStore, id: u64, body: &RequestBody) -> ApiResult {
    let fields = required_fields(body)?;
    let update = SongUpdate {
        name: Some(fields.name),
        track_number: Some(fields.track_number),
        lyrics: Some(fields.lyrics),
    };
    match store.update_song(id, update) {
        Some(song) => ok(song),
        None => Err(ApiError::NotFound(SONG_NOT_FOUND)),
    }
}

/// DELETE /songs/:id
pub fn delete(store: &mut CatalogStore, id: u64) -> ApiResult {
    match store.delete_song(id) {
        Some(_) => {
            info!(song_id = id, "Song deleted");
            deleted()
        }
        None => Err(ApiError::NotFound(SONG_NOT_FOUND)),
    }
}
