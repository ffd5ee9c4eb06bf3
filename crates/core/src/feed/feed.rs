//! Async feed driver binding a [`FeedState`] to a catalog and a selector.

use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::catalog::{MetadataCatalog, Page};
use crate::metrics::FEED_LOADS;

use super::selector::FeedSelector;
use super::state::{FeedState, LoadOutcome};

/// Point-in-time view of a feed for rendering.
#[derive(Debug, Clone)]
pub struct FeedSnapshot<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub is_loading: bool,
    pub has_more: bool,
    pub error: Option<String>,
}

struct FeedInner<S: FeedSelector> {
    selector: S,
    state: FeedState<S::Item>,
}

/// An infinite-scroll feed over one selector.
///
/// `load_more` calls are serialized by the loading guard — no two fetches
/// for the same feed are ever in flight concurrently. Re-initializing with
/// a new selector supersedes any outstanding fetch: its response is
/// discarded on arrival (cancellation by relevance check, not true
/// cancellation).
///
/// The viewport-intersection trigger stays with the caller; this type only
/// exposes [`should_load_more`](Feed::should_load_more).
pub struct Feed<S: FeedSelector> {
    catalog: Arc<dyn MetadataCatalog>,
    inner: Mutex<FeedInner<S>>,
}

impl<S: FeedSelector> Feed<S> {
    /// Create a feed from a seed page, typically the first page the caller
    /// already fetched for initial render.
    pub fn new(catalog: Arc<dyn MetadataCatalog>, selector: S, seed: Page<S::Item>) -> Self {
        let mut state = FeedState::new();
        state.initialize(seed);
        Self {
            catalog,
            inner: Mutex::new(FeedInner { selector, state }),
        }
    }

    /// Reset the feed for a new selector and seed page.
    ///
    /// Must be called whenever the selector identity (category, search
    /// query, filters) changes. Any in-flight `load_more` for the previous
    /// selector becomes stale.
    pub fn initialize(&self, selector: S, seed: Page<S::Item>) {
        let mut inner = self.inner.lock().unwrap();
        inner.selector = selector;
        inner.state.initialize(seed);
    }

    /// Fetch and append the next page.
    ///
    /// No-op (`Skipped`) while a load is in flight or the feed is
    /// exhausted.
    pub async fn load_more(&self) -> LoadOutcome {
        let (selector, token) = {
            let mut inner = self.inner.lock().unwrap();
            let Some(token) = inner.state.begin_load() else {
                FEED_LOADS.with_label_values(&["skipped"]).inc();
                return LoadOutcome::Skipped;
            };
            if !inner.selector.supports_pagination() {
                inner.state.force_exhausted();
                FEED_LOADS.with_label_values(&["exhausted"]).inc();
                return LoadOutcome::Exhausted;
            }
            (inner.selector.clone(), token)
        };

        let result = selector
            .fetch_page(self.catalog.as_ref(), token.page())
            .await
            .map_err(|e| {
                warn!(page = token.page(), error = %e, "feed page fetch failed");
                format!("Failed to load more {}", selector.describe())
            });

        let outcome = {
            let mut inner = self.inner.lock().unwrap();
            inner.state.complete_load(token, result)
        };
        FEED_LOADS.with_label_values(&[outcome.as_str()]).inc();
        outcome
    }

    /// Whether a viewport trigger should invoke [`load_more`](Feed::load_more).
    pub fn should_load_more(&self) -> bool {
        self.inner.lock().unwrap().state.should_load_more()
    }

    /// Current selector.
    pub fn selector(&self) -> S {
        self.inner.lock().unwrap().selector.clone()
    }

    /// Snapshot of the current state for rendering.
    pub fn snapshot(&self) -> FeedSnapshot<S::Item> {
        let inner = self.inner.lock().unwrap();
        FeedSnapshot {
            items: inner.state.items().to_vec(),
            current_page: inner.state.current_page(),
            is_loading: inner.state.is_loading(),
            has_more: inner.state.has_more(),
            error: inner.state.error().map(|e| e.to_string()),
        }
    }
}
