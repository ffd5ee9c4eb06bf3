//! Suggestion types and classification.

use serde::{Deserialize, Serialize};

use crate::catalog::{Movie, MultiResult, Person, TvSeries};

/// Kind of a suggestion, from the upstream discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Movie,
    Tv,
    Person,
}

/// A single entry in the search dropdown.
///
/// Ephemeral: recomputed per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// TMDB ID of the underlying entity.
    pub id: u64,
    /// Display title (movie title, series or person name).
    pub title: String,
    /// Secondary line: release year, first-air year or department, with a
    /// fixed fallback per kind.
    pub subtitle: String,
    /// Poster path (movie/TV) or profile path (person), when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    /// Entity kind.
    pub kind: SuggestionKind,
    /// Route the suggestion navigates to.
    pub target_path: String,
}

impl Suggestion {
    fn from_movie(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            subtitle: movie
                .year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "Movie".to_string()),
            image_path: movie.poster_path.clone(),
            kind: SuggestionKind::Movie,
            target_path: format!("/movie/{}", movie.id),
        }
    }

    fn from_tv(series: &TvSeries) -> Self {
        Self {
            id: series.id,
            title: series.name.clone(),
            subtitle: series
                .year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "TV Series".to_string()),
            image_path: series.poster_path.clone(),
            kind: SuggestionKind::Tv,
            target_path: format!("/tv/{}", series.id),
        }
    }

    fn from_person(person: &Person) -> Self {
        Self {
            id: person.id,
            title: person.name.clone(),
            subtitle: person
                .known_for_department
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "Person".to_string()),
            image_path: person.profile_path.clone(),
            kind: SuggestionKind::Person,
            target_path: format!("/person/{}", person.id),
        }
    }
}

impl From<&MultiResult> for Suggestion {
    fn from(result: &MultiResult) -> Self {
        match result {
            MultiResult::Movie(movie) => Suggestion::from_movie(movie),
            MultiResult::Tv(series) => Suggestion::from_tv(series),
            MultiResult::Person(person) => Suggestion::from_person(person),
        }
    }
}

/// Classify raw multi-search results into suggestions.
///
/// Takes the first `limit` results in the API's relevance order; no local
/// re-ranking.
pub fn classify(results: &[MultiResult], limit: usize) -> Vec<Suggestion> {
    results.iter().take(limit).map(Suggestion::from).collect()
}
