//! Pure accumulation state machine for infinite-scroll feeds.
//!
//! `FeedState` holds everything the UI needs for one list view: the
//! accumulated items, the page cursor, the loading/exhausted flags and the
//! last error. It knows nothing about fetching; `Feed` drives it.

/// Token handed out by [`FeedState::begin_load`].
///
/// Carries the generation observed when the load started; a completion
/// whose generation no longer matches is discarded as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    generation: u64,
    page: u32,
}

impl LoadToken {
    /// The page this load is fetching.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Outcome of a load-more attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was appended.
    Loaded { appended: usize },
    /// Nothing happened: a load was already in flight or the feed is
    /// exhausted.
    Skipped,
    /// The selector does not paginate; the feed is now exhausted.
    Exhausted,
    /// The response arrived after the feed was re-initialized and was
    /// discarded.
    Stale,
    /// The fetch failed; accumulated items and the cursor are unchanged.
    Failed,
}

impl LoadOutcome {
    /// Metric label for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadOutcome::Loaded { .. } => "loaded",
            LoadOutcome::Skipped => "skipped",
            LoadOutcome::Exhausted => "exhausted",
            LoadOutcome::Stale => "stale",
            LoadOutcome::Failed => "failed",
        }
    }
}

/// Accumulated list state for one active list view.
///
/// Items are appended in arrival order and never de-duplicated by id:
/// if the upstream catalog returns overlapping pages, the overlap is
/// preserved verbatim.
#[derive(Debug, Clone)]
pub struct FeedState<T> {
    items: Vec<T>,
    current_page: u32,
    total_pages: u32,
    loading: bool,
    has_more: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> FeedState<T> {
    /// Create an empty, exhausted state. Call [`initialize`] with a seed
    /// page before use.
    ///
    /// [`initialize`]: FeedState::initialize
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            total_pages: 0,
            loading: false,
            has_more: false,
            error: None,
            generation: 0,
        }
    }

    /// Reset to a freshly seeded state.
    ///
    /// Must run whenever the selector identity changes. Bumping the
    /// generation makes any outstanding load token stale, so a late
    /// response for the previous selector cannot touch this state.
    pub fn initialize(&mut self, seed: crate::catalog::Page<T>) {
        self.generation += 1;
        self.items = seed.results;
        self.current_page = seed.page;
        self.total_pages = seed.total_pages;
        self.has_more = seed.page < seed.total_pages;
        self.loading = false;
        self.error = None;
    }

    /// Start a load for the next page.
    ///
    /// Returns `None` when a load is already in flight or the feed is
    /// exhausted — the idempotent safety valve against duplicate triggers
    /// from overlapping scroll events.
    pub fn begin_load(&mut self) -> Option<LoadToken> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(LoadToken {
            generation: self.generation,
            page: self.current_page + 1,
        })
    }

    /// Apply the result of a load started with [`begin_load`].
    ///
    /// A token from a previous generation is discarded without touching
    /// state. On failure the error message is recorded and the cursor is
    /// left where it was, so a retry resumes from the same page.
    ///
    /// [`begin_load`]: FeedState::begin_load
    pub fn complete_load(
        &mut self,
        token: LoadToken,
        result: Result<crate::catalog::Page<T>, String>,
    ) -> LoadOutcome {
        if token.generation != self.generation {
            return LoadOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                let appended = page.results.len();
                self.items.extend(page.results);
                self.current_page = token.page;
                self.total_pages = page.total_pages;
                self.has_more = token.page < page.total_pages;
                LoadOutcome::Loaded { appended }
            }
            Err(message) => {
                self.error = Some(message);
                LoadOutcome::Failed
            }
        }
    }

    /// Mark the feed exhausted without fetching.
    ///
    /// Used for selectors that do not paginate: the first load attempt
    /// lands here instead of requesting page 2 forever.
    pub fn force_exhausted(&mut self) {
        self.loading = false;
        self.has_more = false;
    }

    /// Accumulated items, oldest page first.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Page of the most recently applied fetch.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether more pages exist.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Last load error, cleared by the next load attempt or initialize.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a viewport trigger should fire a load.
    pub fn should_load_more(&self) -> bool {
        self.has_more && !self.loading
    }
}

impl<T> Default for FeedState<T> {
    fn default() -> Self {
        Self::new()
    }
}
