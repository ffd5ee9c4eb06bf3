//! Movie browse and detail handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use marquee_core::catalog::{
    Credits, Genre, Movie, MovieDetails, Page, Review, Video,
};
use marquee_core::feed::FeedSelector;
use marquee_core::{FilterOptions, MovieSelector, SortKey};

use super::{bad_request, catalog_error, ErrorResponse};
use crate::state::AppState;

/// Query parameters for browse endpoints.
///
/// `search` overrides `category`; `discover` applies the filter
/// parameters.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    /// Comma-separated genre IDs.
    pub genres: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f32>,
    pub language: Option<String>,
    pub sort_by: Option<SortKey>,
}

impl BrowseParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn filters(&self) -> FilterOptions {
        FilterOptions {
            genres: self
                .genres
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .filter_map(|g| g.trim().parse().ok())
                .collect(),
            year: self.year,
            rating: self.rating,
            language: self.language.clone(),
            sort_by: self.sort_by,
        }
    }

    /// Trimmed non-empty search query, if any.
    pub fn search_query(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Category name with `-` and `_` spellings unified.
    pub fn normalized_category(&self) -> Option<String> {
        self.category.as_deref().map(|c| c.replace('-', "_"))
    }
}

/// Query parameters for paged sub-resources (reviews).
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

fn movie_selector(params: &BrowseParams) -> Result<MovieSelector, String> {
    if let Some(query) = params.search_query() {
        return Ok(MovieSelector::Search(query.to_string()));
    }

    match params.normalized_category().as_deref() {
        None | Some("trending") => Ok(MovieSelector::Trending),
        Some("popular") => Ok(MovieSelector::Popular),
        Some("top_rated") => Ok(MovieSelector::TopRated),
        Some("now_playing") => Ok(MovieSelector::NowPlaying),
        Some("upcoming") => Ok(MovieSelector::Upcoming),
        Some("discover") => Ok(MovieSelector::Discover(params.filters())),
        Some(other) => Err(format!("Unknown movie category: {}", other)),
    }
}

/// List movies by category, search query or discovery filters.
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> Result<Json<Page<Movie>>, (StatusCode, Json<ErrorResponse>)> {
    let selector = movie_selector(&params).map_err(bad_request)?;
    let page = selector
        .fetch_page(state.catalog().as_ref(), params.page())
        .await
        .map_err(catalog_error)?;
    Ok(Json(page))
}

/// Movie details.
pub async fn movie_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<MovieDetails>, (StatusCode, Json<ErrorResponse>)> {
    let details = state
        .catalog()
        .movie_details(id)
        .await
        .map_err(catalog_error)?;
    Ok(Json(details))
}

/// Movie cast.
pub async fn movie_credits(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Credits>, (StatusCode, Json<ErrorResponse>)> {
    let credits = state
        .catalog()
        .movie_credits(id)
        .await
        .map_err(catalog_error)?;
    Ok(Json(credits))
}

/// Movie videos.
pub async fn movie_videos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Video>>, (StatusCode, Json<ErrorResponse>)> {
    let videos = state
        .catalog()
        .movie_videos(id)
        .await
        .map_err(catalog_error)?;
    Ok(Json(videos))
}

/// Movie reviews.
pub async fn movie_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<Review>>, (StatusCode, Json<ErrorResponse>)> {
    let reviews = state
        .catalog()
        .movie_reviews(id, params.page.unwrap_or(1).max(1))
        .await
        .map_err(catalog_error)?;
    Ok(Json(reviews))
}

/// Movie genre list.
pub async fn movie_genres(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Genre>>, (StatusCode, Json<ErrorResponse>)> {
    let genres = state.catalog().movie_genres().await.map_err(catalog_error)?;
    Ok(Json(genres))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_overrides_category() {
        let params = BrowseParams {
            category: Some("popular".to_string()),
            search: Some("batman".to_string()),
            ..BrowseParams::default()
        };
        assert_eq!(
            movie_selector(&params).unwrap(),
            MovieSelector::Search("batman".to_string())
        );
    }

    #[test]
    fn test_blank_search_falls_back_to_category() {
        let params = BrowseParams {
            category: Some("popular".to_string()),
            search: Some("   ".to_string()),
            ..BrowseParams::default()
        };
        assert_eq!(movie_selector(&params).unwrap(), MovieSelector::Popular);
    }

    #[test]
    fn test_missing_category_defaults_to_trending() {
        assert_eq!(
            movie_selector(&BrowseParams::default()).unwrap(),
            MovieSelector::Trending
        );
    }

    #[test]
    fn test_kebab_category_spelling() {
        let params = BrowseParams {
            category: Some("top-rated".to_string()),
            ..BrowseParams::default()
        };
        assert_eq!(movie_selector(&params).unwrap(), MovieSelector::TopRated);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let params = BrowseParams {
            category: Some("bogus".to_string()),
            ..BrowseParams::default()
        };
        assert!(movie_selector(&params).is_err());
    }

    #[test]
    fn test_discover_collects_filters() {
        let params = BrowseParams {
            category: Some("discover".to_string()),
            genres: Some("28, 878".to_string()),
            year: Some(1999),
            rating: Some(7.0),
            ..BrowseParams::default()
        };
        match movie_selector(&params).unwrap() {
            MovieSelector::Discover(filters) => {
                assert_eq!(filters.genres, vec![28, 878]);
                assert_eq!(filters.year, Some(1999));
                assert_eq!(filters.rating, Some(7.0));
            }
            other => panic!("Expected Discover, got {:?}", other),
        }
    }
}
