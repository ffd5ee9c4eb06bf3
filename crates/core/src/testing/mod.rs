//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides a mock catalog client and fixtures, allowing
//! comprehensive testing of the engines and the server without real
//! network infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee_core::testing::{fixtures, MockCatalog};
//!
//! let catalog = MockCatalog::new();
//!
//! // Configure mock responses
//! catalog.set_movies(fixtures::movies(10)).await;
//! catalog.set_page_size(5).await;
//!
//! // Use wherever an Arc<dyn MetadataCatalog> is expected...
//! ```

mod mock_catalog;

pub use mock_catalog::{MockCatalog, RecordedQuery};

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::catalog::{
        CastMember, Episode, Genre, Movie, MovieDetails, Page, Person, PersonDetails, Review,
        SeasonDetails, SeasonSummary, TvSeries, TvSeriesDetails, Video,
    };
    use crate::prefs::PreferenceRecord;

    /// Create a test movie with reasonable defaults.
    pub fn movie(title: &str, year: u32) -> Movie {
        Movie {
            id: u64::from(year * 100 + title.len() as u32) % 100_000,
            title: title.to_string(),
            original_title: None,
            overview: Some(format!("A movie about {}.", title.to_lowercase())),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: Some("/backdrop.jpg".to_string()),
            release_date: Some(format!("{}-06-15", year)),
            vote_average: Some(7.5),
            vote_count: 1200,
            genre_ids: vec![18, 53],
            original_language: Some("en".to_string()),
            popularity: Some(42.0),
        }
    }

    /// Create `count` movies with sequential ids (1-indexed).
    pub fn movies(count: usize) -> Vec<Movie> {
        (1..=count)
            .map(|i| Movie {
                id: i as u64,
                title: format!("Movie {}", i),
                original_title: None,
                overview: None,
                poster_path: Some(format!("/poster-{}.jpg", i)),
                backdrop_path: None,
                release_date: Some(format!("{}-01-01", 2000 + i)),
                vote_average: Some(6.0 + (i % 4) as f32),
                vote_count: 100 * i as u32,
                genre_ids: vec![18],
                original_language: Some("en".to_string()),
                popularity: Some(10.0 * i as f32),
            })
            .collect()
    }

    /// Create a test TV series.
    pub fn tv_series(name: &str, year: u32) -> TvSeries {
        TvSeries {
            id: u64::from(year * 100 + name.len() as u32 + 1) % 100_000,
            name: name.to_string(),
            original_name: None,
            overview: Some(format!("A TV series about {}.", name.to_lowercase())),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: Some("/backdrop.jpg".to_string()),
            first_air_date: Some(format!("{}-01-20", year)),
            vote_average: Some(8.0),
            vote_count: 900,
            genre_ids: vec![18],
            original_language: Some("en".to_string()),
            popularity: Some(30.0),
        }
    }

    /// Create a test person.
    pub fn person(name: &str, department: &str) -> Person {
        Person {
            id: (name.len() as u64 * 131) % 100_000,
            name: name.to_string(),
            profile_path: Some("/profile.jpg".to_string()),
            known_for_department: Some(department.to_string()),
            popularity: Some(15.0),
        }
    }

    /// Wrap results into a page envelope.
    pub fn page<T>(results: Vec<T>, page: u32, total_pages: u32) -> Page<T> {
        let total_results = total_pages * results.len().max(1) as u32;
        Page {
            page,
            results,
            total_pages,
            total_results,
        }
    }

    /// Create test movie details.
    pub fn movie_details(title: &str, year: u32) -> MovieDetails {
        MovieDetails {
            id: u64::from(year * 100 + title.len() as u32) % 100_000,
            title: title.to_string(),
            original_title: None,
            overview: Some(format!("A movie about {}.", title.to_lowercase())),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            release_date: Some(format!("{}-06-15", year)),
            runtime: Some(122),
            genres: vec![genre(18, "Drama"), genre(53, "Thriller")],
            tagline: Some("Nothing is what it seems.".to_string()),
            status: Some("Released".to_string()),
            homepage: None,
            budget: Some(60_000_000),
            revenue: Some(180_000_000),
            vote_average: Some(7.5),
            vote_count: 1200,
        }
    }

    /// Create test TV series details with season summaries.
    pub fn tv_details(name: &str, seasons: u32) -> TvSeriesDetails {
        TvSeriesDetails {
            id: (name.len() as u64 * 1000) % 100_000,
            name: name.to_string(),
            original_name: None,
            overview: Some(format!("A TV series about {}.", name.to_lowercase())),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            first_air_date: Some("2020-01-01".to_string()),
            genres: vec![genre(18, "Drama")],
            number_of_seasons: seasons,
            number_of_episodes: seasons * 10,
            episode_run_time: vec![45],
            seasons: (1..=seasons)
                .map(|s| SeasonSummary {
                    id: 10_000 + u64::from(s),
                    season_number: s,
                    name: Some(format!("Season {}", s)),
                    overview: None,
                    episode_count: 10,
                    air_date: Some(format!("{}-01-01", 2020 + s - 1)),
                    poster_path: None,
                })
                .collect(),
            tagline: None,
            status: Some("Returning Series".to_string()),
            homepage: None,
            vote_average: Some(8.0),
            vote_count: 900,
        }
    }

    /// Create a test season with `episodes` episodes.
    pub fn season(season_number: u32, episodes: u32) -> SeasonDetails {
        SeasonDetails {
            id: 20_000 + u64::from(season_number),
            season_number,
            name: Some(format!("Season {}", season_number)),
            overview: None,
            air_date: Some("2020-01-01".to_string()),
            poster_path: None,
            episodes: (1..=episodes)
                .map(|e| episode(season_number, e))
                .collect(),
        }
    }

    /// Create a test episode.
    pub fn episode(season_number: u32, episode_number: u32) -> Episode {
        Episode {
            id: 30_000 + u64::from(season_number * 100 + episode_number),
            name: format!("Episode {}", episode_number),
            episode_number,
            season_number,
            overview: Some(format!("Episode {} description.", episode_number)),
            still_path: None,
            air_date: Some(format!("2020-01-{:02}", episode_number.min(28))),
            runtime: Some(45),
            vote_average: Some(8.0),
        }
    }

    /// Create test person details.
    pub fn person_details(name: &str) -> PersonDetails {
        PersonDetails {
            id: (name.len() as u64 * 131) % 100_000,
            name: name.to_string(),
            biography: Some(format!("{} is an actor.", name)),
            birthday: Some("1964-09-02".to_string()),
            deathday: None,
            place_of_birth: Some("Beirut, Lebanon".to_string()),
            profile_path: Some("/profile.jpg".to_string()),
            known_for_department: Some("Acting".to_string()),
            homepage: None,
            also_known_as: vec![],
            popularity: Some(15.0),
        }
    }

    /// Create a test cast member.
    pub fn cast_member(name: &str, character: &str, order: u32) -> CastMember {
        CastMember {
            id: (name.len() as u64 * 131) % 100_000,
            name: name.to_string(),
            character: Some(character.to_string()),
            profile_path: None,
            order,
        }
    }

    /// Create a test video.
    pub fn video(name: &str) -> Video {
        Video {
            id: format!("vid-{}", name.to_lowercase().replace(' ', "-")),
            key: "dQw4w9WgXcQ".to_string(),
            name: name.to_string(),
            site: "YouTube".to_string(),
            kind: "Trailer".to_string(),
            official: true,
        }
    }

    /// Create a test review.
    pub fn review(author: &str) -> Review {
        Review {
            id: format!("rev-{}", author.to_lowercase()),
            author: author.to_string(),
            content: "Loved it.".to_string(),
            created_at: Utc.with_ymd_and_hms(2021, 6, 23, 15, 58, 17).unwrap(),
            rating: Some(9.0),
        }
    }

    /// Create a test genre.
    pub fn genre(id: u32, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
        }
    }

    /// Create a test preference record.
    pub fn preference_record(id: u64, title: &str) -> PreferenceRecord {
        PreferenceRecord {
            id,
            title: title.to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            release_date: Some("1999-03-31".to_string()),
            vote_average: Some(7.9),
        }
    }
}
