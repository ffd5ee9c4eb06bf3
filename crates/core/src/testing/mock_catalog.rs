//! Mock catalog for testing.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::{
    CatalogError, CastMember, Credits, Episode, FilterOptions, Genre, MetadataCatalog, Movie,
    MovieDetails, MultiResult, Page, Person, PersonCredits, PersonDetails, Review, SeasonDetails,
    TimeWindow, TvSeries, TvSeriesDetails, Video,
};

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedQuery {
    /// A named list fetch (popular, top rated, trending, ...).
    List { endpoint: &'static str, page: u32 },
    /// A text search.
    Search {
        endpoint: &'static str,
        query: String,
        page: u32,
    },
    /// A filtered discovery fetch.
    Discover { endpoint: &'static str, page: u32 },
    /// A by-id detail fetch.
    Detail { endpoint: &'static str, id: u64 },
    /// A season fetch.
    Season { tv_id: u64, season: u32 },
    /// An episode fetch.
    EpisodeFetch {
        tv_id: u64,
        season: u32,
        episode: u32,
    },
    /// A genre list fetch.
    Genres { endpoint: &'static str },
}

/// Mock implementation of the MetadataCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Configurable movie/TV/person/multi result sets, sliced into pages
/// - Query recording for assertions
/// - One-shot error injection
/// - Artificial latency, for exercising stale-response handling
///
/// # Example
///
/// ```rust,ignore
/// use marquee_core::testing::{fixtures, MockCatalog};
///
/// let catalog = MockCatalog::new();
/// catalog.set_movies(fixtures::movies(5)).await;
/// catalog.set_page_size(2).await;
///
/// let page = catalog.popular_movies(2).await?;
/// assert_eq!(page.results.len(), 2);
/// ```
#[derive(Debug)]
pub struct MockCatalog {
    movies: RwLock<Vec<Movie>>,
    tv: RwLock<Vec<TvSeries>>,
    people: RwLock<Vec<Person>>,
    multi: RwLock<Vec<MultiResult>>,
    movie_details: RwLock<HashMap<u64, MovieDetails>>,
    tv_details: RwLock<HashMap<u64, TvSeriesDetails>>,
    seasons: RwLock<HashMap<(u64, u32), SeasonDetails>>,
    episodes: RwLock<HashMap<(u64, u32, u32), Episode>>,
    person_details: RwLock<HashMap<u64, PersonDetails>>,
    cast: RwLock<Vec<CastMember>>,
    videos: RwLock<Vec<Video>>,
    reviews: RwLock<Vec<Review>>,
    person_credits: RwLock<HashMap<u64, PersonCredits>>,
    movie_genre_list: RwLock<Vec<Genre>>,
    tv_genre_list: RwLock<Vec<Genre>>,
    /// Items per page when slicing result sets.
    page_size: RwLock<usize>,
    /// When set, reported instead of the computed page count.
    total_pages_override: RwLock<Option<u32>>,
    /// Recorded queries.
    queries: RwLock<Vec<RecordedQuery>>,
    /// If set, the next operation will fail with this error.
    next_error: RwLock<Option<CatalogError>>,
    /// If set, every operation sleeps this long before responding.
    latency: RwLock<Option<Duration>>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(Vec::new()),
            tv: RwLock::new(Vec::new()),
            people: RwLock::new(Vec::new()),
            multi: RwLock::new(Vec::new()),
            movie_details: RwLock::new(HashMap::new()),
            tv_details: RwLock::new(HashMap::new()),
            seasons: RwLock::new(HashMap::new()),
            episodes: RwLock::new(HashMap::new()),
            person_details: RwLock::new(HashMap::new()),
            cast: RwLock::new(Vec::new()),
            videos: RwLock::new(Vec::new()),
            reviews: RwLock::new(Vec::new()),
            person_credits: RwLock::new(HashMap::new()),
            movie_genre_list: RwLock::new(Vec::new()),
            tv_genre_list: RwLock::new(Vec::new()),
            page_size: RwLock::new(20),
            total_pages_override: RwLock::new(None),
            queries: RwLock::new(Vec::new()),
            next_error: RwLock::new(None),
            latency: RwLock::new(None),
        }
    }

    // =========================================================================
    // Result Configuration
    // =========================================================================

    /// Replace the movie result set.
    pub async fn set_movies(&self, movies: Vec<Movie>) {
        *self.movies.write().await = movies;
    }

    /// Replace the TV result set.
    pub async fn set_tv(&self, tv: Vec<TvSeries>) {
        *self.tv.write().await = tv;
    }

    /// Replace the people result set.
    pub async fn set_people(&self, people: Vec<Person>) {
        *self.people.write().await = people;
    }

    /// Replace the multi-search result set.
    pub async fn set_multi_results(&self, results: Vec<MultiResult>) {
        *self.multi.write().await = results;
    }

    /// Add movie details addressable by id.
    pub async fn add_movie_details(&self, details: MovieDetails) {
        self.movie_details.write().await.insert(details.id, details);
    }

    /// Add TV series details addressable by id.
    pub async fn add_tv_details(&self, details: TvSeriesDetails) {
        self.tv_details.write().await.insert(details.id, details);
    }

    /// Add a season addressable by (series, season number).
    pub async fn add_season(&self, tv_id: u64, season: SeasonDetails) {
        self.seasons
            .write()
            .await
            .insert((tv_id, season.season_number), season);
    }

    /// Add an episode addressable by (series, season, episode).
    pub async fn add_episode(&self, tv_id: u64, episode: Episode) {
        self.episodes
            .write()
            .await
            .insert((tv_id, episode.season_number, episode.episode_number), episode);
    }

    /// Add person details addressable by id.
    pub async fn add_person_details(&self, details: PersonDetails) {
        self.person_details.write().await.insert(details.id, details);
    }

    /// Set the cast returned for any credits lookup.
    pub async fn set_cast(&self, cast: Vec<CastMember>) {
        *self.cast.write().await = cast;
    }

    /// Set the videos returned for any video lookup.
    pub async fn set_videos(&self, videos: Vec<Video>) {
        *self.videos.write().await = videos;
    }

    /// Set the reviews returned for any review lookup.
    pub async fn set_reviews(&self, reviews: Vec<Review>) {
        *self.reviews.write().await = reviews;
    }

    /// Set a person's filmography.
    pub async fn set_person_credits(&self, person_id: u64, credits: PersonCredits) {
        self.person_credits.write().await.insert(person_id, credits);
    }

    /// Set the movie genre list.
    pub async fn set_movie_genres(&self, genres: Vec<Genre>) {
        *self.movie_genre_list.write().await = genres;
    }

    /// Set the TV genre list.
    pub async fn set_tv_genres(&self, genres: Vec<Genre>) {
        *self.tv_genre_list.write().await = genres;
    }

    /// Set how many items each page carries.
    pub async fn set_page_size(&self, page_size: usize) {
        *self.page_size.write().await = page_size;
    }

    /// Report this page count instead of the computed one. Useful for
    /// mimicking feeds whose upstream total is larger than the configured
    /// result set.
    pub async fn set_total_pages(&self, total_pages: u32) {
        *self.total_pages_override.write().await = Some(total_pages);
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    /// Clear recorded queries.
    pub async fn clear_recorded(&self) {
        self.queries.write().await.clear();
    }

    /// Get the number of queries performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    // =========================================================================
    // Error Injection and Latency
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make every operation sleep before responding.
    pub async fn set_latency(&self, latency: Duration) {
        *self.latency.write().await = Some(latency);
    }

    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }

    async fn record(&self, query: RecordedQuery) {
        self.queries.write().await.push(query);
    }

    /// Shared prologue of every operation: record, simulate latency,
    /// surface an injected error.
    async fn begin(&self, query: RecordedQuery) -> Result<(), CatalogError> {
        self.record(query).await;
        if let Some(latency) = *self.latency.read().await {
            tokio::time::sleep(latency).await;
        }
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        Ok(())
    }

    async fn page_of<T: Clone>(&self, items: &[T], page: u32) -> Page<T> {
        let page_size = *self.page_size.read().await;
        let computed_pages = (items.len().div_ceil(page_size)).max(1) as u32;
        let total_pages = self
            .total_pages_override
            .read()
            .await
            .unwrap_or(computed_pages);

        let start = (page.saturating_sub(1) as usize) * page_size;
        let results = items
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        Page {
            page,
            results,
            total_pages,
            total_results: items.len() as u32,
        }
    }

    async fn movie_page(&self, endpoint: &'static str, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.begin(RecordedQuery::List { endpoint, page }).await?;
        let movies = self.movies.read().await;
        Ok(self.page_of(&movies, page).await)
    }

    async fn tv_page(&self, endpoint: &'static str, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.begin(RecordedQuery::List { endpoint, page }).await?;
        let tv = self.tv.read().await;
        Ok(self.page_of(&tv, page).await)
    }
}

#[async_trait]
impl MetadataCatalog for MockCatalog {
    async fn trending_movies(&self, _window: TimeWindow) -> Result<Page<Movie>, CatalogError> {
        self.movie_page("trending_movies", 1).await
    }

    async fn popular_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.movie_page("popular_movies", page).await
    }

    async fn top_rated_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.movie_page("top_rated_movies", page).await
    }

    async fn now_playing_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.movie_page("now_playing_movies", page).await
    }

    async fn upcoming_movies(&self, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.movie_page("upcoming_movies", page).await
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<Page<Movie>, CatalogError> {
        self.begin(RecordedQuery::Search {
            endpoint: "search_movies",
            query: query.to_string(),
            page,
        })
        .await?;

        let movies = self.movies.read().await;
        let query_lower = query.to_lowercase();
        let matching: Vec<Movie> = movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();
        Ok(self.page_of(&matching, page).await)
    }

    async fn discover_movies(
        &self,
        page: u32,
        _filters: &FilterOptions,
    ) -> Result<Page<Movie>, CatalogError> {
        self.begin(RecordedQuery::Discover {
            endpoint: "discover_movies",
            page,
        })
        .await?;
        let movies = self.movies.read().await;
        Ok(self.page_of(&movies, page).await)
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "movie_details",
            id,
        })
        .await?;
        self.movie_details
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Movie {} not found", id)))
    }

    async fn movie_credits(&self, id: u64) -> Result<Credits, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "movie_credits",
            id,
        })
        .await?;
        Ok(Credits {
            cast: self.cast.read().await.clone(),
        })
    }

    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "movie_videos",
            id,
        })
        .await?;
        Ok(self.videos.read().await.clone())
    }

    async fn movie_reviews(&self, id: u64, page: u32) -> Result<Page<Review>, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "movie_reviews",
            id,
        })
        .await?;
        let reviews = self.reviews.read().await;
        Ok(self.page_of(&reviews, page).await)
    }

    async fn trending_tv(&self, _window: TimeWindow) -> Result<Page<TvSeries>, CatalogError> {
        self.tv_page("trending_tv", 1).await
    }

    async fn popular_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.tv_page("popular_tv", page).await
    }

    async fn top_rated_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.tv_page("top_rated_tv", page).await
    }

    async fn on_the_air_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.tv_page("on_the_air_tv", page).await
    }

    async fn airing_today_tv(&self, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.tv_page("airing_today_tv", page).await
    }

    async fn search_tv(&self, query: &str, page: u32) -> Result<Page<TvSeries>, CatalogError> {
        self.begin(RecordedQuery::Search {
            endpoint: "search_tv",
            query: query.to_string(),
            page,
        })
        .await?;

        let tv = self.tv.read().await;
        let query_lower = query.to_lowercase();
        let matching: Vec<TvSeries> = tv
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();
        Ok(self.page_of(&matching, page).await)
    }

    async fn discover_tv(
        &self,
        page: u32,
        _filters: &FilterOptions,
    ) -> Result<Page<TvSeries>, CatalogError> {
        self.begin(RecordedQuery::Discover {
            endpoint: "discover_tv",
            page,
        })
        .await?;
        let tv = self.tv.read().await;
        Ok(self.page_of(&tv, page).await)
    }

    async fn tv_details(&self, id: u64) -> Result<TvSeriesDetails, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "tv_details",
            id,
        })
        .await?;
        self.tv_details
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Series {} not found", id)))
    }

    async fn tv_credits(&self, id: u64) -> Result<Credits, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "tv_credits",
            id,
        })
        .await?;
        Ok(Credits {
            cast: self.cast.read().await.clone(),
        })
    }

    async fn tv_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "tv_videos",
            id,
        })
        .await?;
        Ok(self.videos.read().await.clone())
    }

    async fn tv_reviews(&self, id: u64, page: u32) -> Result<Page<Review>, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "tv_reviews",
            id,
        })
        .await?;
        let reviews = self.reviews.read().await;
        Ok(self.page_of(&reviews, page).await)
    }

    async fn season_details(
        &self,
        tv_id: u64,
        season: u32,
    ) -> Result<SeasonDetails, CatalogError> {
        self.begin(RecordedQuery::Season { tv_id, season }).await?;
        self.seasons
            .read()
            .await
            .get(&(tv_id, season))
            .cloned()
            .ok_or_else(|| {
                CatalogError::NotFound(format!("Season {} of series {} not found", season, tv_id))
            })
    }

    async fn episode_details(
        &self,
        tv_id: u64,
        season: u32,
        episode: u32,
    ) -> Result<Episode, CatalogError> {
        self.begin(RecordedQuery::EpisodeFetch {
            tv_id,
            season,
            episode,
        })
        .await?;
        self.episodes
            .read()
            .await
            .get(&(tv_id, season, episode))
            .cloned()
            .ok_or_else(|| {
                CatalogError::NotFound(format!(
                    "Episode {}x{} of series {} not found",
                    season, episode, tv_id
                ))
            })
    }

    async fn search_people(&self, query: &str, page: u32) -> Result<Page<Person>, CatalogError> {
        self.begin(RecordedQuery::Search {
            endpoint: "search_people",
            query: query.to_string(),
            page,
        })
        .await?;

        let people = self.people.read().await;
        let query_lower = query.to_lowercase();
        let matching: Vec<Person> = people
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();
        Ok(self.page_of(&matching, page).await)
    }

    async fn person_details(&self, id: u64) -> Result<PersonDetails, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "person_details",
            id,
        })
        .await?;
        self.person_details
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Person {} not found", id)))
    }

    async fn person_movie_credits(&self, id: u64) -> Result<PersonCredits, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "person_movie_credits",
            id,
        })
        .await?;
        Ok(self
            .person_credits
            .read()
            .await
            .get(&id)
            .cloned()
            .unwrap_or(PersonCredits {
                cast: Vec::new(),
                crew: Vec::new(),
            }))
    }

    async fn person_tv_credits(&self, id: u64) -> Result<PersonCredits, CatalogError> {
        self.begin(RecordedQuery::Detail {
            endpoint: "person_tv_credits",
            id,
        })
        .await?;
        Ok(self
            .person_credits
            .read()
            .await
            .get(&id)
            .cloned()
            .unwrap_or(PersonCredits {
                cast: Vec::new(),
                crew: Vec::new(),
            }))
    }

    async fn search_multi(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Page<MultiResult>, CatalogError> {
        self.begin(RecordedQuery::Search {
            endpoint: "search_multi",
            query: query.to_string(),
            page,
        })
        .await?;

        let multi = self.multi.read().await;
        let query_lower = query.to_lowercase();
        let matching: Vec<MultiResult> = multi
            .iter()
            .filter(|r| {
                let label = match r {
                    MultiResult::Movie(m) => &m.title,
                    MultiResult::Tv(t) => &t.name,
                    MultiResult::Person(p) => &p.name,
                };
                label.to_lowercase().contains(&query_lower)
            })
            .cloned()
            .collect();
        Ok(self.page_of(&matching, page).await)
    }

    async fn movie_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        self.begin(RecordedQuery::Genres {
            endpoint: "movie_genres",
        })
        .await?;
        Ok(self.movie_genre_list.read().await.clone())
    }

    async fn tv_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        self.begin(RecordedQuery::Genres {
            endpoint: "tv_genres",
        })
        .await?;
        Ok(self.tv_genre_list.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_paging() {
        let catalog = MockCatalog::new();
        catalog.set_movies(fixtures::movies(5)).await;
        catalog.set_page_size(2).await;

        let page1 = catalog.popular_movies(1).await.unwrap();
        assert_eq!(page1.results.len(), 2);
        assert_eq!(page1.total_pages, 3);
        assert_eq!(page1.total_results, 5);

        let page3 = catalog.popular_movies(3).await.unwrap();
        assert_eq!(page3.results.len(), 1);
        assert!(!page3.has_next());
    }

    #[tokio::test]
    async fn test_total_pages_override() {
        let catalog = MockCatalog::new();
        catalog.set_movies(fixtures::movies(2)).await;
        catalog.set_total_pages(10).await;

        let page = catalog.popular_movies(1).await.unwrap();
        assert_eq!(page.total_pages, 10);
    }

    #[tokio::test]
    async fn test_search_filters_by_title() {
        let catalog = MockCatalog::new();
        catalog
            .set_movies(vec![
                fixtures::movie("Batman Begins", 2005),
                fixtures::movie("Heat", 1995),
            ])
            .await;

        let page = catalog.search_movies("batman", 1).await.unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Batman Begins");
    }

    #[tokio::test]
    async fn test_error_injection_is_consumed() {
        let catalog = MockCatalog::new();
        catalog.set_next_error(CatalogError::RateLimitExceeded).await;

        assert!(catalog.popular_movies(1).await.is_err());
        assert!(catalog.popular_movies(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        let catalog = MockCatalog::new();
        let result = catalog.movie_details(42).await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_recorded_queries() {
        let catalog = MockCatalog::new();
        catalog.popular_movies(2).await.ok();
        catalog.search_multi("heat", 1).await.ok();

        let queries = catalog.recorded_queries().await;
        assert_eq!(queries.len(), 2);
        assert_eq!(
            queries[0],
            RecordedQuery::List {
                endpoint: "popular_movies",
                page: 2
            }
        );
        assert_eq!(
            queries[1],
            RecordedQuery::Search {
                endpoint: "search_multi",
                query: "heat".to_string(),
                page: 1
            }
        );
    }
}
