//! Seed fixture loading.
//!
//! Each fixture is a JSON object mapping decimal IDs to records, e.g.
//! `{"1": {"artistId": 1, "name": "Red Hot Chili Peppers"}}`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::catalog::model::{Album, Artist, Record, Song};
use crate::config::SeedConfig;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("seed file {path}: key {key} holds record with id {record_id}")]
    KeyMismatch {
        path: PathBuf,
        key: u64,
        record_id: u64,
    },
    #[error("seed file {path}: id {key} leaves no room for new records")]
    IdCeiling { path: PathBuf, key: u64 },
}

/// Initial catalog contents, keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub artists: BTreeMap<u64, Artist>,
    pub albums: BTreeMap<u64, Album>,
    pub songs: BTreeMap<u64, Song>,
}

/// Load all three fixtures named by the config.
pub fn load_seed(config: &SeedConfig) -> Result<Seed, SeedError> {
    let seed = Seed {
        artists: load_fixture(Path::new(&config.artists_path))?,
        albums: load_fixture(Path::new(&config.albums_path))?,
        songs: load_fixture(Path::new(&config.songs_path))?,
    };

    info!(
        artists = seed.artists.len(),
        albums = seed.albums.len(),
        songs = seed.songs.len(),
        "Seed data loaded"
    );
    Ok(seed)
}

fn load_fixture<T: Record + DeserializeOwned>(path: &Path) -> Result<BTreeMap<u64, T>, SeedError> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: BTreeMap<u64, T> =
        serde_json::from_str(&content).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some((key, record)) = rows.iter().find(|(key, record)| **key != record.id()) {
        return Err(SeedError::KeyMismatch {
            path: path.to_path_buf(),
            key: *key,
            record_id: record.id(),
        });
    }
    if let Some(&key) = rows.keys().next_back().filter(|key| **key == u64::MAX) {
        return Err(SeedError::IdCeiling {
            path: path.to_path_buf(),
            key,
        });
    }
    Ok(rows)
}
