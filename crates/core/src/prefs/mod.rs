//! Local favorites/watchlist preferences.
//!
//! Two independent collections of minimal movie records, persisted as
//! JSON arrays through a pluggable key-value capability. Single-writer
//! contract: no cross-process change notification exists.

mod kv;
mod sqlite;
mod store;

pub use kv::{KeyValueStore, MemoryStore};
pub use sqlite::SqliteStore;
pub use store::PreferenceStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors opening a persistent store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Database(String),
}

/// The two preference collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Favorites,
    Watchlist,
}

impl Collection {
    /// Fixed storage key for this collection.
    pub fn storage_key(self) -> &'static str {
        match self {
            Collection::Favorites => "movie-discovery-favorites",
            Collection::Watchlist => "movie-discovery-watchlist",
        }
    }
}

/// Minimal persisted projection of a catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreferenceRecord {
    /// TMDB ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Poster path, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Release date, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Average vote, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
}

impl From<&crate::catalog::Movie> for PreferenceRecord {
    fn from(movie: &crate::catalog::Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: movie.release_date.clone(),
            vote_average: movie.vote_average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_storage_keys() {
        assert_eq!(Collection::Favorites.storage_key(), "movie-discovery-favorites");
        assert_eq!(Collection::Watchlist.storage_key(), "movie-discovery-watchlist");
    }

    #[test]
    fn test_record_projection_from_movie() {
        let movie = fixtures::movie("The Matrix", 1999);
        let record = PreferenceRecord::from(&movie);

        assert_eq!(record.id, movie.id);
        assert_eq!(record.title, "The Matrix");
        assert_eq!(record.release_date, movie.release_date);
        assert_eq!(record.vote_average, movie.vote_average);
    }
}
