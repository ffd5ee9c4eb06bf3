//! Types for catalog API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Extract the year from a `YYYY-MM-DD` (or partial) date string.
fn year_of(date: Option<&String>) -> Option<u32> {
    date.and_then(|d| d.split('-').next())
        .and_then(|y| y.parse().ok())
}

// ============================================================================
// List Envelope
// ============================================================================

/// Paged response envelope returned by all list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// 1-indexed page number.
    pub page: u32,
    /// Results in upstream relevance order.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Total number of pages available.
    pub total_pages: u32,
    /// Total number of results across all pages.
    pub total_results: u32,
}

impl<T> Page<T> {
    /// Whether pages beyond this one exist.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

// ============================================================================
// Movies
// ============================================================================

/// A movie as returned by list and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// TMDB movie ID.
    pub id: u64,
    /// Movie title.
    pub title: String,
    /// Original title (in original language).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    /// Overview/synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Poster path (relative to the image CDN base).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Release date (YYYY-MM-DD, possibly empty upstream).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Average vote (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Genre IDs (list endpoints only carry IDs, not names).
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Original language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    /// Popularity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f32>,
}

impl Movie {
    /// Get the release year from the release date.
    pub fn year(&self) -> Option<u32> {
        year_of(self.release_date.as_ref())
    }
}

/// Full movie details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Movie title.
    pub title: String,
    /// Original title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    /// Overview/synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Poster path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Release date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// Genres with names (detail endpoints only).
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Tagline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Release status ("Released", "In Production", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Official homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Budget in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    /// Revenue in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<u64>,
    /// Average vote (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
}

impl MovieDetails {
    /// Get the release year from the release date.
    pub fn year(&self) -> Option<u32> {
        year_of(self.release_date.as_ref())
    }
}

// ============================================================================
// TV
// ============================================================================

/// A TV series as returned by list and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvSeries {
    /// TMDB series ID.
    pub id: u64,
    /// Series name.
    pub name: String,
    /// Original name (in original language).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Overview/synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Poster path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// First air date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    /// Average vote (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Original language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    /// Popularity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f32>,
}

impl TvSeries {
    /// Get the first-air year.
    pub fn year(&self) -> Option<u32> {
        year_of(self.first_air_date.as_ref())
    }
}

/// Full TV series details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvSeriesDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Series name.
    pub name: String,
    /// Original name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Overview/synopsis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Poster path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// First air date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    /// Genres with names.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Number of seasons.
    #[serde(default)]
    pub number_of_seasons: u32,
    /// Number of episodes.
    #[serde(default)]
    pub number_of_episodes: u32,
    /// Typical episode runtimes in minutes.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// Season summaries.
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
    /// Tagline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Airing status ("Returning Series", "Ended", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Official homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Average vote (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
}

impl TvSeriesDetails {
    /// Get the first-air year.
    pub fn year(&self) -> Option<u32> {
        year_of(self.first_air_date.as_ref())
    }
}

/// Summary of a season (embedded in series details).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonSummary {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 for specials).
    pub season_number: u32,
    /// Season name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Season overview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Episode count.
    #[serde(default)]
    pub episode_count: u32,
    /// Air date of first episode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_date: Option<String>,
    /// Poster path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

/// Full season details including episodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonDetails {
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Season name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Season overview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Air date of first episode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_date: Option<String>,
    /// Poster path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Episodes in this season.
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// A TV episode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode name.
    pub name: String,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Season number.
    #[serde(default)]
    pub season_number: u32,
    /// Episode overview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Still image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub still_path: Option<String>,
    /// Air date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    /// Average vote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
}

// ============================================================================
// People
// ============================================================================

/// A person as returned by search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Profile image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
    /// Department the person is known for ("Acting", "Directing", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_for_department: Option<String>,
    /// Popularity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f32>,
}

/// Full person details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    /// Birthday (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    /// Death date, if deceased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deathday: Option<String>,
    /// Place of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    /// Profile image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
    /// Department the person is known for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_for_department: Option<String>,
    /// Official homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Alternative names.
    #[serde(default)]
    pub also_known_as: Vec<String>,
    /// Popularity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f32>,
}

// ============================================================================
// Credits, Videos, Reviews, Genres
// ============================================================================

/// A cast member of a movie or series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Character played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// Profile image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
    /// Billing order.
    #[serde(default)]
    pub order: u32,
}

/// Cast listing for a movie or series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// A filmography entry from a person's movie or TV credits.
///
/// Movie entries carry `title`/`release_date`, TV entries carry
/// `name`/`first_air_date`; cast entries carry `character`, crew
/// entries carry `job`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonCreditEntry {
    /// TMDB movie or series ID.
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
}

/// A person's filmography (cast and crew entries).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonCredits {
    #[serde(default)]
    pub cast: Vec<PersonCreditEntry>,
    #[serde(default)]
    pub crew: Vec<PersonCreditEntry>,
}

/// A promotional video (trailer, teaser, clip).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    /// TMDB video ID.
    pub id: String,
    /// Provider-side key (e.g. YouTube video ID).
    pub key: String,
    /// Video title.
    pub name: String,
    /// Hosting site ("YouTube", "Vimeo").
    pub site: String,
    /// Video kind ("Trailer", "Teaser", "Clip", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether this is an official upload.
    #[serde(default)]
    pub official: bool,
}

/// A user review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// TMDB review ID.
    pub id: String,
    /// Review author.
    pub author: String,
    /// Review text.
    pub content: String,
    /// When the review was written.
    pub created_at: DateTime<Utc>,
    /// Author's rating (0-10), when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

/// A genre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// TMDB genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

// ============================================================================
// Multi Search
// ============================================================================

/// A result from the multi-type search endpoint, discriminated by the
/// upstream `media_type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "media_type", rename_all = "snake_case")]
pub enum MultiResult {
    Movie(Movie),
    Tv(TvSeries),
    Person(Person),
}

// ============================================================================
// Request Shaping
// ============================================================================

/// Time window for trending feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    Day,
    Week,
}

impl TimeWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

/// Sort order for discovery queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "popularity.desc")]
    PopularityDesc,
    #[serde(rename = "popularity.asc")]
    PopularityAsc,
    #[serde(rename = "release_date.desc")]
    ReleaseDateDesc,
    #[serde(rename = "release_date.asc")]
    ReleaseDateAsc,
    #[serde(rename = "vote_average.desc")]
    VoteAverageDesc,
    #[serde(rename = "vote_average.asc")]
    VoteAverageAsc,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PopularityDesc => "popularity.desc",
            SortKey::PopularityAsc => "popularity.asc",
            SortKey::ReleaseDateDesc => "release_date.desc",
            SortKey::ReleaseDateAsc => "release_date.asc",
            SortKey::VoteAverageDesc => "vote_average.desc",
            SortKey::VoteAverageAsc => "vote_average.asc",
        }
    }
}

/// Filters for discovery queries. A pure request-shaping value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Restrict to these genre IDs.
    #[serde(default)]
    pub genres: Vec<u32>,
    /// Release year (movies) or first-air year (TV).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Minimum average vote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Original language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Sort order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
}

impl FilterOptions {
    /// Query parameters for `/discover/movie`.
    pub fn movie_params(&self) -> Vec<(&'static str, String)> {
        self.params("year")
    }

    /// Query parameters for `/discover/tv`. TV discovery uses
    /// `first_air_date_year` instead of `year`.
    pub fn tv_params(&self) -> Vec<(&'static str, String)> {
        self.params("first_air_date_year")
    }

    fn params(&self, year_key: &'static str) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.genres.is_empty() {
            let joined = self
                .genres
                .iter()
                .map(|g| g.to_string())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("with_genres", joined));
        }
        if let Some(year) = self.year {
            params.push((year_key, year.to_string()));
        }
        if let Some(rating) = self.rating {
            params.push(("vote_average.gte", rating.to_string()));
        }
        if let Some(ref language) = self.language {
            params.push(("with_original_language", language.clone()));
        }
        if let Some(sort_by) = self.sort_by {
            params.push(("sort_by", sort_by.as_str().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_year() {
        let movie = Movie {
            id: 603,
            title: "The Matrix".to_string(),
            original_title: None,
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: Some("1999-03-31".to_string()),
            vote_average: Some(8.2),
            vote_count: 100,
            genre_ids: vec![],
            original_language: Some("en".to_string()),
            popularity: None,
        };
        assert_eq!(movie.year(), Some(1999));
    }

    #[test]
    fn test_movie_year_empty_date() {
        let movie = Movie {
            id: 1,
            title: "Unknown".to_string(),
            original_title: None,
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: Some("".to_string()),
            vote_average: None,
            vote_count: 0,
            genre_ids: vec![],
            original_language: None,
            popularity: None,
        };
        assert_eq!(movie.year(), None);
    }

    #[test]
    fn test_page_has_next() {
        let page = Page::<Movie> {
            page: 1,
            results: vec![],
            total_pages: 3,
            total_results: 42,
        };
        assert!(page.has_next());

        let last = Page::<Movie> {
            page: 3,
            results: vec![],
            total_pages: 3,
            total_results: 42,
        };
        assert!(!last.has_next());
    }

    #[test]
    fn test_multi_result_discriminator() {
        let json = r#"[
            {"media_type": "movie", "id": 603, "title": "The Matrix"},
            {"media_type": "tv", "id": 1396, "name": "Breaking Bad"},
            {"media_type": "person", "id": 6384, "name": "Keanu Reeves", "known_for_department": "Acting"}
        ]"#;

        let results: Vec<MultiResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results.len(), 3);
        assert!(matches!(results[0], MultiResult::Movie(ref m) if m.id == 603));
        assert!(matches!(results[1], MultiResult::Tv(ref t) if t.name == "Breaking Bad"));
        assert!(
            matches!(results[2], MultiResult::Person(ref p) if p.known_for_department.as_deref() == Some("Acting"))
        );
    }

    #[test]
    fn test_filter_options_movie_params() {
        let filters = FilterOptions {
            genres: vec![28, 878],
            year: Some(1999),
            rating: Some(7.5),
            language: Some("en".to_string()),
            sort_by: Some(SortKey::VoteAverageDesc),
        };

        let params = filters.movie_params();
        assert!(params.contains(&("with_genres", "28,878".to_string())));
        assert!(params.contains(&("year", "1999".to_string())));
        assert!(params.contains(&("vote_average.gte", "7.5".to_string())));
        assert!(params.contains(&("with_original_language", "en".to_string())));
        assert!(params.contains(&("sort_by", "vote_average.desc".to_string())));
    }

    #[test]
    fn test_filter_options_tv_year_key() {
        let filters = FilterOptions {
            year: Some(2008),
            ..FilterOptions::default()
        };
        let params = filters.tv_params();
        assert!(params.contains(&("first_air_date_year", "2008".to_string())));
    }

    #[test]
    fn test_filter_options_empty() {
        assert!(FilterOptions::default().movie_params().is_empty());
    }

    #[test]
    fn test_review_timestamp_parsing() {
        let json = r#"{
            "id": "5e8f3a",
            "author": "someone",
            "content": "Great.",
            "created_at": "2021-06-23T15:58:17.000Z",
            "rating": 9.0
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.created_at.timestamp(), 1_624_463_897);
        assert_eq!(review.rating, Some(9.0));
    }
}
