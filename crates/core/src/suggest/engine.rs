//! Debounced suggestion engine.
//!
//! Converts raw keystrokes into a capped, classified suggestion list with
//! minimal request volume: a trailing debounce timer coalesces bursts of
//! input into at most one multi-search request per quiet period.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use crate::catalog::MetadataCatalog;
use crate::metrics::SUGGESTION_FETCHES;

use super::types::{classify, Suggestion};

/// Tuning knobs for the suggestion engine.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Quiet period after the last keystroke before a request fires.
    pub debounce: Duration,
    /// Minimum trimmed query length worth searching.
    pub min_query_len: usize,
    /// Maximum suggestions kept, in API order.
    pub max_suggestions: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_query_len: 2,
            max_suggestions: 8,
        }
    }
}

struct EngineState {
    query: String,
    /// Latest timer token. Each `input` bumps it, invalidating both any
    /// pending debounce fire and any in-flight response.
    token: u64,
    suggestions: Vec<Suggestion>,
    dropdown: bool,
    expanded: bool,
    loading: bool,
}

struct EngineInner {
    catalog: Arc<dyn MetadataCatalog>,
    config: SuggestConfig,
    state: Mutex<EngineState>,
    updates: watch::Sender<Vec<Suggestion>>,
}

/// Debounced live-search engine for one search box.
///
/// Cheap to clone; clones share state. Spawned debounce tasks hold a clone,
/// so the engine must be used inside a tokio runtime.
#[derive(Clone)]
pub struct SuggestionEngine {
    inner: Arc<EngineInner>,
}

impl SuggestionEngine {
    pub fn new(catalog: Arc<dyn MetadataCatalog>, config: SuggestConfig) -> Self {
        let (updates, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(EngineInner {
                catalog,
                config,
                state: Mutex::new(EngineState {
                    query: String::new(),
                    token: 0,
                    suggestions: Vec::new(),
                    dropdown: false,
                    expanded: false,
                    loading: false,
                }),
                updates,
            }),
        }
    }

    /// Feed the current text of the search input.
    ///
    /// Starts (or restarts) the quiet-period timer. A query shorter than
    /// the minimum clears suggestions immediately and cancels any pending
    /// request intent — no flash of stale results.
    pub fn input(&self, text: &str) {
        let query = text.trim().to_string();
        let token = {
            let mut state = self.inner.state.lock().unwrap();
            state.query = text.to_string();
            state.token += 1;
            state.expanded = true;

            if query.chars().count() < self.inner.config.min_query_len {
                state.loading = false;
                if !state.suggestions.is_empty() || state.dropdown {
                    state.suggestions.clear();
                    state.dropdown = false;
                    let _ = self.inner.updates.send(Vec::new());
                }
                return;
            }
            state.token
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.config.debounce).await;

            // A newer keystroke restarted the timer; this fire is dead.
            if inner.state.lock().unwrap().token != token {
                return;
            }
            inner.state.lock().unwrap().loading = true;

            let result = inner.catalog.search_multi(&query, 1).await;

            let mut state = inner.state.lock().unwrap();
            if state.token != token {
                SUGGESTION_FETCHES.with_label_values(&["stale"]).inc();
                return;
            }
            state.loading = false;
            match result {
                Ok(page) => {
                    state.suggestions = classify(&page.results, inner.config.max_suggestions);
                    state.dropdown = !state.suggestions.is_empty();
                    SUGGESTION_FETCHES.with_label_values(&["ok"]).inc();
                }
                Err(e) => {
                    // Search-as-you-type is a soft-fail feature: swallow the
                    // error and suppress the dropdown.
                    debug!(error = %e, "suggestion fetch failed");
                    state.suggestions.clear();
                    state.dropdown = false;
                    SUGGESTION_FETCHES.with_label_values(&["error"]).inc();
                }
            }
            let _ = inner.updates.send(state.suggestions.clone());
        });
    }

    /// Dismiss the dropdown (Escape, or pointer pressed outside the search
    /// container). Collapses the whole affordance when the query is empty.
    pub fn dismiss(&self) {
        let mut state = self.inner.state.lock().unwrap();
        state.dropdown = false;
        if state.query.trim().is_empty() {
            state.expanded = false;
        }
    }

    /// A suggestion was activated: clear the query, drop the suggestions
    /// and collapse back to the closed state.
    pub fn activate(&self) {
        let mut state = self.inner.state.lock().unwrap();
        state.query.clear();
        state.token += 1;
        state.loading = false;
        state.suggestions.clear();
        state.dropdown = false;
        state.expanded = false;
        let _ = self.inner.updates.send(Vec::new());
    }

    /// Open the search affordance without typing.
    pub fn expand(&self) {
        self.inner.state.lock().unwrap().expanded = true;
    }

    /// Current suggestion list.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.inner.state.lock().unwrap().suggestions.clone()
    }

    /// Whether the dropdown should be shown.
    pub fn dropdown_visible(&self) -> bool {
        self.inner.state.lock().unwrap().dropdown
    }

    /// Whether the search affordance is open.
    pub fn is_expanded(&self) -> bool {
        self.inner.state.lock().unwrap().expanded
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.state.lock().unwrap().loading
    }

    /// Current raw query text.
    pub fn query(&self) -> String {
        self.inner.state.lock().unwrap().query.clone()
    }

    /// Subscribe to suggestion list updates.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Suggestion>> {
        self.inner.updates.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::catalog::CatalogError;
    use crate::testing::{fixtures, MockCatalog, RecordedQuery};

    /// Short debounce so tests stay fast; margins are generous relative
    /// to it.
    fn test_config() -> SuggestConfig {
        SuggestConfig {
            debounce: Duration::from_millis(50),
            ..SuggestConfig::default()
        }
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(150)).await;
    }

    #[tokio::test]
    async fn test_burst_of_keystrokes_issues_one_request() {
        let catalog = Arc::new(MockCatalog::new());
        catalog
            .set_multi_results(vec![crate::catalog::MultiResult::Movie(fixtures::movie(
                "Batman Begins",
                2005,
            ))])
            .await;

        let engine = SuggestionEngine::new(catalog.clone(), test_config());
        engine.input("ba");
        tokio::time::sleep(Duration::from_millis(10)).await;
        engine.input("batman");
        settle().await;

        assert_eq!(catalog.query_count().await, 1);
        match &catalog.recorded_queries().await[0] {
            RecordedQuery::Search { endpoint, query, .. } => {
                assert_eq!(*endpoint, "search_multi");
                assert_eq!(query, "batman");
            }
            other => panic!("Expected Search query, got {:?}", other),
        }
        assert_eq!(engine.suggestions().len(), 1);
        assert!(engine.dropdown_visible());
    }

    #[tokio::test]
    async fn test_clearing_before_debounce_issues_no_request() {
        let catalog = Arc::new(MockCatalog::new());
        let engine = SuggestionEngine::new(catalog.clone(), test_config());

        engine.input("batman");
        tokio::time::sleep(Duration::from_millis(10)).await;
        engine.input("");
        settle().await;

        assert_eq!(catalog.query_count().await, 0);
        assert!(engine.suggestions().is_empty());
        assert!(!engine.dropdown_visible());
    }

    #[tokio::test]
    async fn test_short_query_issues_no_request() {
        let catalog = Arc::new(MockCatalog::new());
        let engine = SuggestionEngine::new(catalog.clone(), test_config());

        engine.input("b");
        settle().await;

        assert_eq!(catalog.query_count().await, 0);
    }

    #[tokio::test]
    async fn test_older_response_cannot_overwrite_newer() {
        let catalog = Arc::new(MockCatalog::new());
        catalog
            .set_multi_results(vec![crate::catalog::MultiResult::Movie(fixtures::movie(
                "Aliens",
                1986,
            ))])
            .await;
        catalog.set_latency(Duration::from_millis(100)).await;

        let engine = SuggestionEngine::new(catalog.clone(), test_config());
        engine.input("alien");
        // First debounce fires at ~50ms; its fetch resolves at ~150ms.
        tokio::time::sleep(Duration::from_millis(60)).await;
        engine.input("aliens");
        // Second fetch starts at ~110ms, resolves at ~210ms.
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(catalog.query_count().await, 2);
        let queries = catalog.recorded_queries().await;
        match &queries[1] {
            RecordedQuery::Search { query, .. } => assert_eq!(query, "aliens"),
            other => panic!("Expected Search query, got {:?}", other),
        }
        // The surviving suggestion list came from the newest request.
        assert_eq!(engine.suggestions().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_clears_suggestions_silently() {
        let catalog = Arc::new(MockCatalog::new());
        let engine = SuggestionEngine::new(catalog.clone(), test_config());

        // Populate first.
        catalog
            .set_multi_results(vec![crate::catalog::MultiResult::Movie(fixtures::movie(
                "Heat", 1995,
            ))])
            .await;
        engine.input("heat");
        settle().await;
        assert_eq!(engine.suggestions().len(), 1);

        // Then fail the next fetch.
        catalog.set_next_error(CatalogError::RateLimitExceeded).await;
        engine.input("heat 2");
        settle().await;

        assert!(engine.suggestions().is_empty());
        assert!(!engine.dropdown_visible());
    }

    #[tokio::test]
    async fn test_dismiss_collapses_only_when_query_empty() {
        let catalog = Arc::new(MockCatalog::new());
        let engine = SuggestionEngine::new(catalog, test_config());

        engine.input("batman");
        assert!(engine.is_expanded());

        engine.dismiss();
        assert!(!engine.dropdown_visible());
        assert!(engine.is_expanded()); // query still present

        engine.input("");
        engine.dismiss();
        assert!(!engine.is_expanded());
    }

    #[tokio::test]
    async fn test_activate_resets_to_closed_state() {
        let catalog = Arc::new(MockCatalog::new());
        catalog
            .set_multi_results(vec![crate::catalog::MultiResult::Movie(fixtures::movie(
                "Heat", 1995,
            ))])
            .await;

        let engine = SuggestionEngine::new(catalog, test_config());
        engine.input("heat");
        settle().await;
        assert!(engine.dropdown_visible());

        engine.activate();
        assert!(engine.query().is_empty());
        assert!(engine.suggestions().is_empty());
        assert!(!engine.dropdown_visible());
        assert!(!engine.is_expanded());
    }

    #[tokio::test]
    async fn test_subscribe_receives_updates() {
        let catalog = Arc::new(MockCatalog::new());
        catalog
            .set_multi_results(vec![crate::catalog::MultiResult::Movie(fixtures::movie(
                "Heat", 1995,
            ))])
            .await;

        let engine = SuggestionEngine::new(catalog, test_config());
        let mut updates = engine.subscribe();

        engine.input("heat");
        tokio::time::timeout(Duration::from_millis(500), updates.changed())
            .await
            .expect("timed out waiting for suggestions")
            .unwrap();

        assert_eq!(updates.borrow_and_update().len(), 1);
    }
}
