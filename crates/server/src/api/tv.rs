//! TV browse and detail handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use marquee_core::catalog::{
    Credits, Episode, Genre, Page, Review, SeasonDetails, TvSeries, TvSeriesDetails, Video,
};
use marquee_core::feed::FeedSelector;
use marquee_core::TvSelector;

use super::movies::{BrowseParams, PageParams};
use super::{bad_request, catalog_error, ErrorResponse};
use crate::state::AppState;

fn tv_selector(params: &BrowseParams) -> Result<TvSelector, String> {
    if let Some(query) = params.search_query() {
        return Ok(TvSelector::Search(query.to_string()));
    }

    match params.normalized_category().as_deref() {
        None | Some("trending") => Ok(TvSelector::Trending),
        Some("popular") => Ok(TvSelector::Popular),
        Some("top_rated") => Ok(TvSelector::TopRated),
        Some("on_the_air") => Ok(TvSelector::OnTheAir),
        Some("airing_today") => Ok(TvSelector::AiringToday),
        Some("discover") => Ok(TvSelector::Discover(params.filters())),
        Some(other) => Err(format!("Unknown TV category: {}", other)),
    }
}

/// List TV series by category, search query or discovery filters.
pub async fn list_tv(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> Result<Json<Page<TvSeries>>, (StatusCode, Json<ErrorResponse>)> {
    let selector = tv_selector(&params).map_err(bad_request)?;
    let page = selector
        .fetch_page(state.catalog().as_ref(), params.page())
        .await
        .map_err(catalog_error)?;
    Ok(Json(page))
}

/// TV series details.
pub async fn tv_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<TvSeriesDetails>, (StatusCode, Json<ErrorResponse>)> {
    let details = state.catalog().tv_details(id).await.map_err(catalog_error)?;
    Ok(Json(details))
}

/// TV series cast.
pub async fn tv_credits(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Credits>, (StatusCode, Json<ErrorResponse>)> {
    let credits = state.catalog().tv_credits(id).await.map_err(catalog_error)?;
    Ok(Json(credits))
}

/// TV series videos.
pub async fn tv_videos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Video>>, (StatusCode, Json<ErrorResponse>)> {
    let videos = state.catalog().tv_videos(id).await.map_err(catalog_error)?;
    Ok(Json(videos))
}

/// TV series reviews.
pub async fn tv_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<Review>>, (StatusCode, Json<ErrorResponse>)> {
    let reviews = state
        .catalog()
        .tv_reviews(id, params.page.unwrap_or(1).max(1))
        .await
        .map_err(catalog_error)?;
    Ok(Json(reviews))
}

/// Season details including episodes.
pub async fn season_details(
    State(state): State<Arc<AppState>>,
    Path((id, season)): Path<(u64, u32)>,
) -> Result<Json<SeasonDetails>, (StatusCode, Json<ErrorResponse>)> {
    let details = state
        .catalog()
        .season_details(id, season)
        .await
        .map_err(catalog_error)?;
    Ok(Json(details))
}

/// Single episode details.
pub async fn episode_details(
    State(state): State<Arc<AppState>>,
    Path((id, season, episode)): Path<(u64, u32, u32)>,
) -> Result<Json<Episode>, (StatusCode, Json<ErrorResponse>)> {
    let details = state
        .catalog()
        .episode_details(id, season, episode)
        .await
        .map_err(catalog_error)?;
    Ok(Json(details))
}

/// TV genre list.
pub async fn tv_genres(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Genre>>, (StatusCode, Json<ErrorResponse>)> {
    let genres = state.catalog().tv_genres().await.map_err(catalog_error)?;
    Ok(Json(genres))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tv_categories() {
        let params = BrowseParams {
            category: Some("airing-today".to_string()),
            ..BrowseParams::default()
        };
        assert_eq!(tv_selector(&params).unwrap(), TvSelector::AiringToday);

        let params = BrowseParams {
            category: Some("on_the_air".to_string()),
            ..BrowseParams::default()
        };
        assert_eq!(tv_selector(&params).unwrap(), TvSelector::OnTheAir);
    }

    #[test]
    fn test_unknown_tv_category_rejected() {
        let params = BrowseParams {
            category: Some("now_playing".to_string()), // movie-only category
            ..BrowseParams::default()
        };
        assert!(tv_selector(&params).is_err());
    }
}
