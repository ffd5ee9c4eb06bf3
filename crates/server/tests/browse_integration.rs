//! Browse and detail route integration tests.

mod common;

use axum::http::StatusCode;
use common::{fixtures, TestFixture};
use marquee_core::testing::RecordedQuery;

#[tokio::test]
async fn test_health() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_config_redacts_api_key() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/config").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["tmdb"]["api_key_configured"], true);
    assert!(!response.body.to_string().contains("test-key"));
}

#[tokio::test]
async fn test_popular_movies_pagination() {
    let fixture = TestFixture::new().await;
    fixture.catalog.set_movies(fixtures::movies(5)).await;
    fixture.catalog.set_page_size(2).await;

    let response = fixture.get("/api/v1/movies?category=popular&page=2").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 2);
    assert_eq!(response.body["total_pages"], 3);
    assert_eq!(response.body["total_results"], 5);
    assert_eq!(response.body["results"].as_array().unwrap().len(), 2);
    assert_eq!(response.body["results"][0]["title"], "Movie 3");

    let queries = fixture.catalog.recorded_queries().await;
    assert_eq!(
        queries[0],
        RecordedQuery::List {
            endpoint: "popular_movies",
            page: 2
        }
    );
}

#[tokio::test]
async fn test_movie_search_param_overrides_category() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .set_movies(vec![
            fixtures::movie("Batman Begins", 2005),
            fixtures::movie("Heat", 1995),
        ])
        .await;

    let response = fixture
        .get("/api/v1/movies?category=popular&search=batman")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let results = response.body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Batman Begins");
}

#[tokio::test]
async fn test_unknown_category_is_bad_request() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/movies?category=bogus").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"]
        .as_str()
        .unwrap()
        .contains("Unknown movie category"));
}

#[tokio::test]
async fn test_movie_details_not_found_fallback() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/movies/603").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_movie_details_roundtrip() {
    let fixture = TestFixture::new().await;
    let details = fixtures::movie_details("The Matrix", 1999);
    let id = details.id;
    fixture.catalog.add_movie_details(details).await;

    let response = fixture.get(&format!("/api/v1/movies/{}", id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "The Matrix");
    assert_eq!(response.body["runtime"], 122);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .set_next_error(marquee_core::CatalogError::ApiError {
            status: 500,
            message: "upstream broke".to_string(),
        })
        .await;

    let response = fixture.get("/api/v1/movies?category=popular").await;
    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_tv_browse_and_season_routes() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .set_tv(vec![fixtures::tv_series("Breaking Bad", 2008)])
        .await;

    let response = fixture.get("/api/v1/tv?category=popular").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["results"][0]["name"], "Breaking Bad");

    let details = fixtures::tv_details("Breaking Bad", 5);
    let id = details.id;
    fixture.catalog.add_tv_details(details).await;
    fixture.catalog.add_season(id, fixtures::season(2, 13)).await;

    let response = fixture.get(&format!("/api/v1/tv/{}/season/2", id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["season_number"], 2);
    assert_eq!(response.body["episodes"].as_array().unwrap().len(), 13);

    let response = fixture.get(&format!("/api/v1/tv/{}/season/9", id)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_person_routes() {
    let fixture = TestFixture::new().await;
    let details = fixtures::person_details("Keanu Reeves");
    let id = details.id;
    fixture.catalog.add_person_details(details).await;

    let response = fixture.get(&format!("/api/v1/people/{}", id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Keanu Reeves");
    assert_eq!(response.body["known_for_department"], "Acting");

    // Filmography defaults to empty without configuration.
    let response = fixture
        .get(&format!("/api/v1/people/{}/movie-credits", id))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["cast"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_genre_lists() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .set_movie_genres(vec![
            fixtures::genre(28, "Action"),
            fixtures::genre(878, "Science Fiction"),
        ])
        .await;

    let response = fixture.get("/api/v1/genres/movies").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body[1]["name"], "Science Fiction");
}

#[tokio::test]
async fn test_metrics_endpoint_renders() {
    let fixture = TestFixture::new().await;
    fixture.catalog.set_movies(fixtures::movies(1)).await;
    fixture.get("/api/v1/movies?category=popular").await;

    let response = fixture.get("/api/v1/metrics").await;
    assert_eq!(response.status, StatusCode::OK);
}
