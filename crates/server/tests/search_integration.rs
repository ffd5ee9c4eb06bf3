//! Search and suggestion route integration tests.

mod common;

use axum::http::StatusCode;
use common::{fixtures, TestFixture};
use marquee_core::catalog::MultiResult;

fn mixed_results() -> Vec<MultiResult> {
    vec![
        MultiResult::Movie(fixtures::movie("Batman Begins", 2005)),
        MultiResult::Tv(fixtures::tv_series("Batman: The Animated Series", 1992)),
        MultiResult::Person(fixtures::person("Batman Fan", "Acting")),
    ]
}

#[tokio::test]
async fn test_multi_search_returns_discriminated_results() {
    let fixture = TestFixture::new().await;
    fixture.catalog.set_multi_results(mixed_results()).await;

    let response = fixture.get("/api/v1/search/multi?query=batman").await;
    assert_eq!(response.status, StatusCode::OK);

    let results = response.body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["media_type"], "movie");
    assert_eq!(results[1]["media_type"], "tv");
    assert_eq!(results[2]["media_type"], "person");
}

#[tokio::test]
async fn test_multi_search_requires_query() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/api/v1/search/multi?query=%20").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_suggestions_classify_and_cap() {
    let fixture = TestFixture::new().await;
    let mut results = mixed_results();
    for i in 0..10 {
        results.push(MultiResult::Movie(fixtures::movie(
            &format!("Batman {}", i),
            2000 + i,
        )));
    }
    fixture.catalog.set_multi_results(results).await;

    let response = fixture.get("/api/v1/search/suggestions?query=batman").await;
    assert_eq!(response.status, StatusCode::OK);

    let suggestions = response.body.as_array().unwrap();
    assert_eq!(suggestions.len(), 8);
    assert_eq!(suggestions[0]["kind"], "movie");
    assert_eq!(suggestions[0]["subtitle"], "2005");
    assert_eq!(suggestions[1]["kind"], "tv");
    assert_eq!(suggestions[2]["kind"], "person");
    assert_eq!(suggestions[2]["subtitle"], "Acting");
    let target = suggestions[0]["target_path"].as_str().unwrap();
    assert!(target.starts_with("/movie/"));
}

#[tokio::test]
async fn test_short_query_yields_empty_suggestions() {
    let fixture = TestFixture::new().await;
    fixture.catalog.set_multi_results(mixed_results()).await;

    let response = fixture.get("/api/v1/search/suggestions?query=b").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 0);

    // The short query never reached the catalog.
    assert_eq!(fixture.catalog.query_count().await, 0);
}

#[tokio::test]
async fn test_suggestions_soft_fail_on_upstream_error() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .set_next_error(marquee_core::CatalogError::RateLimitExceeded)
        .await;

    let response = fixture.get("/api/v1/search/suggestions?query=batman").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_people_search_route() {
    let fixture = TestFixture::new().await;
    fixture
        .catalog
        .set_people(vec![fixtures::person("Keanu Reeves", "Acting")])
        .await;

    let response = fixture.get("/api/v1/people?query=keanu").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["results"][0]["name"], "Keanu Reeves");
}
