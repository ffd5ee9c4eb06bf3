//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock catalog injected, enabling comprehensive E2E testing
//! without external infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use marquee_core::config::{Config, PreferencesConfig, ServerConfig, SuggestionsConfig};
use marquee_core::testing::MockCatalog;
use marquee_core::{KeyValueStore, PreferenceStore, SqliteStore, TmdbConfig};
use marquee_server::api::create_router;
use marquee_server::state::AppState;

/// Re-export fixtures for test convenience
pub use marquee_core::testing::fixtures;

/// Test fixture for E2E testing with a mock catalog.
///
/// Provides an in-process server with:
/// - A fully controllable `MockCatalog` behind the catalog seam
/// - A real sqlite-backed preference store in a temp directory
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_popular_movies() {
///     let fixture = TestFixture::new().await;
///     fixture.catalog.set_movies(fixtures::movies(5)).await;
///
///     let response = fixture.get("/api/v1/movies?category=popular").await;
///     assert_eq!(response.status, StatusCode::OK);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure responses, inspect recorded queries
    pub catalog: Arc<MockCatalog>,
    /// Temporary directory for the preference database
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with an empty mock catalog.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");

        let catalog = Arc::new(MockCatalog::new());

        let config = Config {
            tmdb: TmdbConfig {
                api_key: "test-key".to_string(),
                base_url: None,
                image_base_url: None,
            },
            server: ServerConfig::default(),
            preferences: PreferencesConfig {
                path: db_path.clone(),
            },
            suggestions: SuggestionsConfig::default(),
        };

        let prefs = PreferenceStore::new(Arc::new(
            SqliteStore::new(&db_path).expect("Failed to create preference store"),
        ) as Arc<dyn KeyValueStore>);

        let state = Arc::new(AppState::new(
            config,
            Arc::clone(&catalog) as Arc<dyn marquee_core::MetadataCatalog>,
            prefs,
        ));

        let router = create_router(state);

        Self {
            router,
            catalog,
            temp_dir,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
