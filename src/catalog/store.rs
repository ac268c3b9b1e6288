//! Entity tables and ID allocation.
//!
//! # Responsibilities
//! - Hold artists, albums and songs keyed by ID
//! - Hand out fresh IDs from per-entity counters
//! - Answer the filtered lookups the API exposes
//!
//! # Design Decisions
//! - `BTreeMap` keyed by ID: iteration order equals insertion order because
//!   IDs only grow
//! - Counters never move backwards, so a deleted ID is never reissued
//! - A counter that would pass `u64::MAX` is exhausted instead of wrapping
//! - No validation here; callers decide what is acceptable before mutating

use std::collections::BTreeMap;

use chrono::Utc;

use crate::catalog::model::{Album, Artist, Record, Song, SongDetails, SongUpdate};
use crate::catalog::seed::Seed;

/// One entity mapping plus its ID counter.
#[derive(Debug, Clone)]
struct Table<T> {
    rows: BTreeMap<u64, T>,
    /// `None` once every ID has been handed out.
    next_id: Option<u64>,
}

impl<T: Record> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: Some(1),
        }
    }

    fn from_rows(rows: BTreeMap<u64, T>) -> Self {
        let next_id = rows.keys().next_back().map_or(Some(1), |max| max.checked_add(1));
        Self { rows, next_id }
    }

    fn allocate_id(&mut self) -> Option<u64> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(id)
    }

    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> Option<&T> {
        let id = self.allocate_id()?;
        Some(self.rows.entry(id).or_insert(build(id)))
    }

    fn get(&self, id: u64) -> Option<&T> {
        self.rows.get(&id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    fn remove(&mut self, id: u64) -> Option<T> {
        self.rows.remove(&id)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

/// The whole catalog: three tables and their counters.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    artists: Table<Artist>,
    albums: Table<Album>,
    songs: Table<Song>,
}

impl CatalogStore {
    /// Create an empty catalog; every counter starts at 1.
    pub fn new() -> Self {
        Self {
            artists: Table::new(),
            albums: Table::new(),
            songs: Table::new(),
        }
    }

    /// Build a catalog from seed fixtures. Counters start above the highest seeded ID.
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            artists: Table::from_rows(seed.artists),
            albums: Table::from_rows(seed.albums),
            songs: Table::from_rows(seed.songs),
        }
    }

    // --- Artists ---

    /// Insert an artist. `None` when the artist IDs are exhausted.
    pub fn create_artist(&mut self, name: String) -> Option<Artist> {
        self.artists
            .insert_with(|artist_id| Artist { artist_id, name })
            .cloned()
    }

    pub fn artists(&self) -> Vec<Artist> {
        self.artists.values().cloned().collect()
    }

    pub fn artist(&self, id: u64) -> Option<&Artist> {
        self.artists.get(id)
    }

    /// Rename an artist. Artists carry no `updatedAt`.
    pub fn update_artist(&mut self, id: u64, name: String) -> Option<Artist> {
        let artist = self.artists.get_mut(id)?;
        artist.name = name;
        Some(artist.clone())
    }

    /// Remove an artist. Its albums stay behind.
    pub fn delete_artist(&mut self, id: u64) -> Option<Artist> {
        self.artists.remove(id)
    }

    // --- Albums ---

    /// Insert an album. The artist is not required to exist.
    pub fn create_album(&mut self, name: String, artist_id: u64) -> Option<Album> {
        self.albums
            .insert_with(|album_id| Album {
                album_id,
                name,
                artist_id,
                updated_at: None,
            })
            .cloned()
    }

    pub fn album(&self, id: u64) -> Option<&Album> {
        self.albums.get(id)
    }

    pub fn albums_by_artist(&self, artist_id: u64) -> Vec<Album> {
        self.albums
            .values()
            .filter(|album| album.artist_id == artist_id)
            .cloned()
            .collect()
    }

    /// Rename an album and stamp `updatedAt`.
    pub fn update_album(&mut self, id: u64, name: String) -> Option<Album> {
        let album = self.albums.get_mut(id)?;
        album.name = name;
        album.updated_at = Some(Utc::now());
        Some(album.clone())
    }

    /// Remove an album. Its songs stay behind.
    pub fn delete_album(&mut self, id: u64) -> Option<Album> {
        self.albums.remove(id)
    }

    // --- Songs ---

    /// Insert a song. The album is not required to exist.
    pub fn create_song(
        &mut self,
        name: String,
        track_number: u32,
        album_id: u64,
        lyrics: String,
    ) -> Option<Song> {
        self.songs
            .insert_with(|song_id| Song {
                song_id,
                name,
                track_number,
                album_id,
                lyrics,
                updated_at: None,
            })
            .cloned()
    }

    pub fn song(&self, id: u64) -> Option<&Song> {
        self.songs.get(id)
    }

    /// A song with its album and that album's artist attached.
    pub fn song_details(&self, id: u64) -> Option<SongDetails> {
        let song = self.songs.get(id)?.clone();
        let album = self.albums.get(song.album_id).cloned();
        let artist = album
            .as_ref()
            .and_then(|album| self.artists.get(album.artist_id))
            .cloned();
        Some(SongDetails { song, album, artist })
    }

    pub fn songs_by_album(&self, album_id: u64) -> Vec<Song> {
        self.songs
            .values()
            .filter(|song| song.album_id == album_id)
            .cloned()
            .collect()
    }

    pub fn songs_by_track_number(&self, track_number: u32) -> Vec<Song> {
        self.songs
            .values()
            .filter(|song| song.track_number == track_number)
            .cloned()
            .collect()
    }

    /// Songs on any album credited to the artist.
    ///
    /// `None` when the artist has no albums at all, which the API reports
    /// differently from an artist whose albums are empty.
    pub fn songs_by_artist(&self, artist_id: u64) -> Option<Vec<Song>> {
        let album_ids: Vec<u64> = self
            .albums
            .values()
            .filter(|album| album.artist_id == artist_id)
            .map(|album| album.album_id)
            .collect();
        if album_ids.is_empty() {
            return None;
        }
        Some(
            self.songs
                .values()
                .filter(|song| album_ids.contains(&song.album_id))
                .cloned()
                .collect(),
        )
    }

    /// Overwrite the given song fields and stamp `updatedAt`.
    pub fn update_song(&mut self, id: u64, update: SongUpdate) -> Option<Song> {
        let song = self.songs.get_mut(id)?;
        if let Some(name) = update.name {
            song.name = name;
        }
        if let Some(track_number) = update.track_number {
            song.track_number = track_number;
        }
        if let Some(lyrics) = update.lyrics {
            song.lyrics = lyrics;
        }
        song.updated_at = Some(Utc::now());
        Some(song.clone())
    }

    pub fn delete_song(&mut self, id: u64) -> Option<Song> {
        self.songs.remove(id)
    }

    /// Record counts as (artists, albums, songs).
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.artists.rows.len(),
            self.albums.rows.len(),
            self.songs.rows.len(),
        )
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
