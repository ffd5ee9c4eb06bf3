//! Catalog integration for the TMDB metadata API.
//!
//! This module provides the typed client used to browse, search and
//! inspect movies, TV series and people, plus the pure image URL helpers.

mod images;
mod tmdb;
mod types;

pub use images::{BackdropSize, ImageUrls, PosterSize, ProfileSize};
pub use tmdb::{TmdbClient, TmdbConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for catalog clients.
///
/// The feed and suggestion engines and the server all depend on this
/// trait rather than on `TmdbClient` directly, so tests can substitute
/// `testing::MockCatalog`.
#[async_trait]
pub trait MetadataCatalog: Send + Sync {
    // Movie lists

    /// Trending movies for the given time window. Not paginated.
    async fn trending_movies(&self, window: TimeWindow) -> Result<Page<Movie>, CatalogError>;

    /// Popular movies.
    async fn popular_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError>;

    /// Top rated movies.
    async fn top_rated_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError>;

    /// Movies currently in theaters.
    async fn now_playing_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError>;

    /// Upcoming movies.
    async fn upcoming_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError>;

    /// Search movies by query.
    async fn search_movies(&self, query: &str, page: u32) -> Result<Page<Movie>, CatalogError>;

    /// Filtered movie discovery.
    async fn discover_movies(
        &self,
        page: u32,
        filters: &FilterOptions,
    ) -> Result<Page<Movie>, CatalogError>;

    // Movie details

    /// Full details for a movie.
    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError>;

    /// Cast listing for a movie.
    async fn movie_credits(&self, id: u64) -> Result<Credits, CatalogError>;

    /// Videos (trailers, teasers) for a movie.
    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError>;

    /// User reviews for a movie.
    async fn movie_reviews(&self, id: u64, page: u32) -> Result<Page<Review>, CatalogError>;

    // TV lists

    /// Trending TV series for the given time window. Not paginated.
    async fn trending_tv(&self, window: TimeWindow) -> Result<Page<TvSeries>, CatalogError>;

    /// Popular TV series.
    async fn popular_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError>;

    /// Top rated TV series.
    async fn top_rated_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError>;

    /// Series currently on the air.
    async fn on_the_air_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError>;

    /// Series airing today.
    async fn airing_today_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError>;

    /// Search TV series by query.
    async fn search_tv(&self, query: &str, page: u32) -> Result<Page<TvSeries>, CatalogError>;

    /// Filtered TV discovery.
    async fn discover_tv(
        &self,
        page: u32,
        filters: &FilterOptions,
    ) -> Result<Page<TvSeries>, CatalogError>;

    // TV details

    /// Full details for a TV series.
    async fn tv_details(&self, id: u64) -> Result<TvSeriesDetails, CatalogError>;

    /// Cast listing for a TV series.
    async fn tv_credits(&self, id: u64) -> Result<Credits, CatalogError>;

    /// Videos for a TV series.
    async fn tv_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError>;

    /// User reviews for a TV series.
    async fn tv_reviews(&self, id: u64, page: u32) -> Result<Page<Review>, CatalogError>;

    /// Full season details including episodes.
    async fn season_details(&self, tv_id: u64, season: u32)
        -> Result<SeasonDetails, CatalogError>;

    /// Single episode details.
    async fn episode_details(
        &self,
        tv_id: u64,
        season: u32,
        episode: u32,
    ) -> Result<Episode, CatalogError>;

    // People

    /// Search people by query.
    async fn search_people(&self, query: &str, page: u32) -> Result<Page<Person>, CatalogError>;

    /// Full details for a person.
    async fn person_details(&self, id: u64) -> Result<PersonDetails, CatalogError>;

    /// A person's movie filmography.
    async fn person_movie_credits(&self, id: u64) -> Result<PersonCredits, CatalogError>;

    /// A person's TV filmography.
    async fn person_tv_credits(&self, id: u64) -> Result<PersonCredits, CatalogError>;

    // Cross-type search and genres

    /// Multi-type search across movies, TV series and people.
    async fn search_multi(&self, query: &str, page: u32)
        -> Result<Page<MultiResult>, CatalogError>;

    /// Movie genre list.
    async fn movie_genres(&self) -> Result<Vec<Genre>, CatalogError>;

    /// TV genre list.
    async fn tv_genres(&self) -> Result<Vec<Genre>, CatalogError>;
}
