//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{
    Credits, Episode, FilterOptions, Genre, Movie, MovieDetails, MultiResult, Page, Person,
    PersonCredits, PersonDetails, Review, SeasonDetails, TimeWindow, TvSeries, TvSeriesDetails,
    Video,
};
use super::{CatalogError, ImageUrls, MetadataCatalog};
use crate::metrics::{CATALOG_REQUESTS, CATALOG_REQUEST_DURATION};

/// Request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Cache hint attached to every request. Responses are safe to reuse for
/// an hour; catalog data changes slowly.
const CACHE_MAX_AGE_SECS: u64 = 3600;

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB API key (required).
    pub api_key: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Image base URL for posters/backdrops/profiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
}

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    images: ImageUrls,
}

impl TmdbClient {
    /// Create a new TMDB client.
    ///
    /// A missing API key is a configuration error here, at construction
    /// time, never per call.
    pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
        if config.api_key.trim().is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_str(&format!("max-age={}", CACHE_MAX_AGE_SECS))
                .map_err(|e| CatalogError::NotConfigured(e.to_string()))?,
        );

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://api.themoviedb.org/3".to_string());

        let images = ImageUrls::new(
            config
                .image_base_url
                .unwrap_or_else(|| ImageUrls::DEFAULT_BASE_URL.to_string()),
        );

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            images,
        })
    }

    /// Image URL builder bound to this client's CDN base.
    pub fn image_urls(&self) -> &ImageUrls {
        &self.images
    }

    /// Issue a GET request and decode the JSON response.
    ///
    /// All endpoint methods funnel through here so status mapping and
    /// metrics are uniform.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);

        debug!(endpoint, path, "TMDB request");

        let timer = CATALOG_REQUEST_DURATION
            .with_label_values(&[endpoint])
            .start_timer();

        let result = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await;

        timer.observe_duration();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                CATALOG_REQUESTS
                    .with_label_values(&[endpoint, "http_error"])
                    .inc();
                return Err(e.into());
            }
        };

        let status = response.status();
        if status == 401 {
            CATALOG_REQUESTS.with_label_values(&[endpoint, "error"]).inc();
            return Err(CatalogError::NotConfigured(
                "Invalid TMDB API key".to_string(),
            ));
        }
        if status == 404 {
            CATALOG_REQUESTS
                .with_label_values(&[endpoint, "not_found"])
                .inc();
            return Err(CatalogError::NotFound(path.to_string()));
        }
        if status == 429 {
            CATALOG_REQUESTS
                .with_label_values(&[endpoint, "rate_limited"])
                .inc();
            return Err(CatalogError::RateLimitExceeded);
        }
        if !status.is_success() {
            CATALOG_REQUESTS.with_label_values(&[endpoint, "error"]).inc();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        match response.json().await {
            Ok(payload) => {
                CATALOG_REQUESTS.with_label_values(&[endpoint, "ok"]).inc();
                Ok(payload)
            }
            Err(e) => {
                CATALOG_REQUESTS
                    .with_label_values(&[endpoint, "parse_error"])
                    .inc();
                Err(CatalogError::ParseError(format!(
                    "Failed to parse {} response: {}",
                    endpoint, e
                )))
            }
        }
    }

    fn page_param(page: u32) -> Vec<(&'static str, String)> {
        vec![("page", page.to_string())]
    }

    fn search_params(query: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![("query", query.to_string()), ("page", page.to_string())]
    }
}

/// Response wrapper for `{ results: [...] }` endpoints (videos).
#[derive(Debug, Deserialize)]
struct ResultsEnvelope<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// Response wrapper for `{ genres: [...] }` endpoints.
#[derive(Debug, Deserialize)]
struct GenresEnvelope {
    #[serde(default)]
    genres: Vec<Genre>,
}

#[async_trait]
impl MetadataCatalog for TmdbClient {
    async fn trending_movies(&self, window: TimeWindow) -> Result<Page<Movie>, CatalogError> {
        let path = format!("/trending/movie/{}", window.as_str());
        self.get_json("trending_movies", &path, &[]).await
    }

    async fn popular_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.get_json("popular_movies", "/movie/popular", &Self::page_param(page))
            .await
    }

    async fn top_rated_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.get_json("top_rated_movies", "/movie/top_rated", &Self::page_param(page))
            .await
    }

    async fn now_playing_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.get_json(
            "now_playing_movies",
            "/movie/now_playing",
            &Self::page_param(page),
        )
        .await
    }

    async fn upcoming_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.get_json("upcoming_movies", "/movie/upcoming", &Self::page_param(page))
            .await
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.get_json(
            "search_movies",
            "/search/movie",
            &Self::search_params(query, page),
        )
        .await
    }

    async fn discover_movies(
        &self,
        page: u32,
        filters: &FilterOptions,
    ) -> Result<Page<Movie>, CatalogError> {
        let mut params = Self::page_param(page);
        params.extend(filters.movie_params());
        self.get_json("discover_movies", "/discover/movie", &params)
            .await
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError> {
        self.get_json("movie_details", &format!("/movie/{}", id), &[])
            .await
    }

    async fn movie_credits(&self, id: u64) -> Result<Credits, CatalogError> {
        self.get_json("movie_credits", &format!("/movie/{}/credits", id), &[])
            .await
    }

    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError> {
        let envelope: ResultsEnvelope<Video> = self
            .get_json("movie_videos", &format!("/movie/{}/videos", id), &[])
            .await?;
        Ok(envelope.results)
    }

    async fn movie_reviews(&self, id: u64, page: u32) -> Result<Page<Review>, CatalogError> {
        self.get_json(
            "movie_reviews",
            &format!("/movie/{}/reviews", id),
            &Self::page_param(page),
        )
        .await
    }

    async fn trending_tv(&self, window: TimeWindow) -> Result<Page<TvSeries>, CatalogError> {
        let path = format!("/trending/tv/{}", window.as_str());
        self.get_json("trending_tv", &path, &[]).await
    }

    async fn popular_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.get_json("popular_tv", "/tv/popular", &Self::page_param(page))
            .await
    }

    async fn top_rated_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.get_json("top_rated_tv", "/tv/top_rated", &Self::page_param(page))
            .await
    }

    async fn on_the_air_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.get_json("on_the_air_tv", "/tv/on_the_air", &Self::page_param(page))
            .await
    }

    async fn airing_today_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.get_json("airing_today_tv", "/tv/airing_today", &Self::page_param(page))
            .await
    }

    async fn search_tv(&self, query: &str, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.get_json("search_tv", "/search/tv", &Self::search_params(query, page))
            .await
    }

    async fn discover_tv(
        &self,
        page: u32,
        filters: &FilterOptions,
    ) -> Result<Page<TvSeries>, CatalogError> {
        let mut params = Self::page_param(page);
        params.extend(filters.tv_params());
        self.get_json("discover_tv", "/discover/tv", &params).await
    }

    async fn tv_details(&self, id: u64) -> Result<TvSeriesDetails, CatalogError> {
        self.get_json("tv_details", &format!("/tv/{}", id), &[]).await
    }

    async fn tv_credits(&self, id: u64) -> Result<Credits, CatalogError> {
        self.get_json("tv_credits", &format!("/tv/{}/credits", id), &[])
            .await
    }

    async fn tv_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError> {
        let envelope: ResultsEnvelope<Video> = self
            .get_json("tv_videos", &format!("/tv/{}/videos", id), &[])
            .await?;
        Ok(envelope.results)
    }

    async fn tv_reviews(&self, id: u64, page: u32) -> Result<Page<Review>, CatalogError> {
        self.get_json(
            "tv_reviews",
            &format!("/tv/{}/reviews", id),
            &Self::page_param(page),
        )
        .await
    }

    async fn season_details(
        &self,
        tv_id: u64,
        season: u32,
    ) -> Result<SeasonDetails, CatalogError> {
        self.get_json(
            "season_details",
            &format!("/tv/{}/season/{}", tv_id, season),
            &[],
        )
        .await
    }

    async fn episode_details(
        &self,
        tv_id: u64,
        season: u32,
        episode: u32,
    ) -> Result<Episode, CatalogError> {
        self.get_json(
            "episode_details",
            &format!("/tv/{}/season/{}/episode/{}", tv_id, season, episode),
            &[],
        )
        .await
    }

    async fn search_people(&self, query: &str, page: u32) -> Result<Page<Person>, CatalogError> {
        self.get_json(
            "search_people",
            "/search/person",
            &Self::search_params(query, page),
        )
        .await
    }

    async fn person_details(&self, id: u64) -> Result<PersonDetails, CatalogError> {
        self.get_json("person_details", &format!("/person/{}", id), &[])
            .await
    }

    async fn person_movie_credits(&self, id: u64) -> Result<PersonCredits, CatalogError> {
        self.get_json(
            "person_movie_credits",
            &format!("/person/{}/movie_credits", id),
            &[],
        )
        .await
    }

    async fn person_tv_credits(&self, id: u64) -> Result<PersonCredits, CatalogError> {
        self.get_json(
            "person_tv_credits",
            &format!("/person/{}/tv_credits", id),
            &[],
        )
        .await
    }

    async fn search_multi(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Page<MultiResult>, CatalogError> {
        self.get_json(
            "search_multi",
            "/search/multi",
            &Self::search_params(query, page),
        )
        .await
    }

    async fn movie_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        let envelope: GenresEnvelope = self
            .get_json("movie_genres", "/genre/movie/list", &[])
            .await?;
        Ok(envelope.genres)
    }

    async fn tv_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        let envelope: GenresEnvelope = self.get_json("tv_genres", "/genre/tv/list", &[]).await?;
        Ok(envelope.genres)
    }
}
