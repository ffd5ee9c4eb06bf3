//! Feed selectors.
//!
//! A selector is the identity of a list view: which named feed, search
//! query or filtered discovery it shows. Changing the selector must
//! re-initialize the feed; the selector also knows how to fetch any page
//! of itself from the catalog.

use async_trait::async_trait;

use crate::catalog::{
    CatalogError, FilterOptions, MetadataCatalog, Movie, Page, TimeWindow, TvSeries,
};

/// A fetch strategy for one kind of feed item.
#[async_trait]
pub trait FeedSelector: Clone + PartialEq + Send + Sync + 'static {
    type Item: Clone + Send + 'static;

    /// Whether this selector supports fetching pages beyond the first.
    fn supports_pagination(&self) -> bool {
        true
    }

    /// Noun used in user-facing load error messages ("movies", "TV series").
    fn describe(&self) -> &'static str;

    /// Fetch one page of this selector from the catalog.
    async fn fetch_page(
        &self,
        catalog: &dyn MetadataCatalog,
        page: u32,
    ) -> Result<Page<Self::Item>, CatalogError>;
}

/// Selector for movie feeds.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieSelector {
    /// Weekly trending feed. Single page only.
    Trending,
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
    /// Text search.
    Search(String),
    /// Filtered discovery.
    Discover(FilterOptions),
}

#[async_trait]
impl FeedSelector for MovieSelector {
    type Item = Movie;

    fn supports_pagination(&self) -> bool {
        !matches!(self, MovieSelector::Trending)
    }

    fn describe(&self) -> &'static str {
        "movies"
    }

    async fn fetch_page(
        &self,
        catalog: &dyn MetadataCatalog,
        page: u32,
    ) -> Result<Page<Movie>, CatalogError> {
        match self {
            MovieSelector::Trending => catalog.trending_movies(TimeWindow::Week).await,
            MovieSelector::Popular => catalog.popular_movies(page).await,
            MovieSelector::TopRated => catalog.top_rated_movies(page).await,
            MovieSelector::NowPlaying => catalog.now_playing_movies(page).await,
            MovieSelector::Upcoming => catalog.upcoming_movies(page).await,
            MovieSelector::Search(query) => catalog.search_movies(query, page).await,
            MovieSelector::Discover(filters) => catalog.discover_movies(page, filters).await,
        }
    }
}

/// Selector for TV series feeds.
#[derive(Debug, Clone, PartialEq)]
pub enum TvSelector {
    /// Weekly trending feed. Single page only.
    Trending,
    Popular,
    TopRated,
    OnTheAir,
    AiringToday,
    /// Text search.
    Search(String),
    /// Filtered discovery.
    Discover(FilterOptions),
}

#[async_trait]
impl FeedSelector for TvSelector {
    type Item = TvSeries;

    fn supports_pagination(&self) -> bool {
        !matches!(self, TvSelector::Trending)
    }

    fn describe(&self) -> &'static str {
        "TV series"
    }

    async fn fetch_page(
        &self,
        catalog: &dyn MetadataCatalog,
        page: u32,
    ) -> Result<Page<TvSeries>, CatalogError> {
        match self {
            TvSelector::Trending => catalog.trending_tv(TimeWindow::Week).await,
            TvSelector::Popular => catalog.popular_tv(page).await,
            TvSelector::TopRated => catalog.top_rated_tv(page).await,
            TvSelector::OnTheAir => catalog.on_the_air_tv(page).await,
            TvSelector::AiringToday => catalog.airing_today_tv(page).await,
            TvSelector::Search(query) => catalog.search_tv(query, page).await,
            TvSelector::Discover(filters) => catalog.discover_tv(page, filters).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_does_not_paginate() {
        assert!(!MovieSelector::Trending.supports_pagination());
        assert!(!TvSelector::Trending.supports_pagination());
        assert!(MovieSelector::Popular.supports_pagination());
        assert!(TvSelector::Search("office".to_string()).supports_pagination());
    }

    #[test]
    fn test_selector_identity() {
        assert_eq!(
            MovieSelector::Search("batman".to_string()),
            MovieSelector::Search("batman".to_string())
        );
        assert_ne!(
            MovieSelector::Search("batman".to_string()),
            MovieSelector::Search("superman".to_string())
        );
        assert_ne!(
            MovieSelector::Discover(FilterOptions::default()),
            MovieSelector::Discover(FilterOptions {
                year: Some(1999),
                ..FilterOptions::default()
            })
        );
    }
}
