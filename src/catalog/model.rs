//! Catalog records as they appear on the wire and in seed fixtures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything stored in a catalog table.
pub trait Record {
    fn id(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub artist_id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_id: u64,
    pub name: String,
    /// Not checked against the artist table.
    pub artist_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub song_id: u64,
    pub name: String,
    pub track_number: u32,
    /// Not checked against the album table.
    pub album_id: u64,
    pub lyrics: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A song with its album and artist resolved through the foreign keys.
///
/// Either side serializes as `null` when the referenced record is gone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongDetails {
    #[serde(flatten)]
    pub song: Song,
    pub album: Option<Album>,
    pub artist: Option<Artist>,
}

/// Fields of a song to overwrite. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct SongUpdate {
    pub name: Option<String>,
    pub track_number: Option<u32>,
    pub lyrics: Option<String>,
}

impl Record for Artist {
    fn id(&self) -> u64 {
        self.artist_id
    }
}

impl Record for Album {
    fn id(&self) -> u64 {
        self.album_id
    }
}

impl Record for Song {
    fn id(&self) -> u64 {
        self.song_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let song = Song {
            song_id: 3,
            name: "Reckoner".into(),
            track_number: 7,
            album_id: 2,
            lyrics: "...".into(),
            updated_at: None,
        };
        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(json["songId"], 3);
        assert_eq!(json["trackNumber"], 7);
        assert_eq!(json["albumId"], 2);
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn test_details_flatten_song_and_null_missing_refs() {
        let details = SongDetails {
            song: Song {
                song_id: 1,
                name: "Airbag".into(),
                track_number: 1,
                album_id: 9,
                lyrics: "...".into(),
                updated_at: None,
            },
            album: None,
            artist: None,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["songId"], 1);
        assert!(json["album"].is_null());
        assert!(json["artist"].is_null());
    }
}
