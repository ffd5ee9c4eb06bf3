//! Infinite-scroll feed accumulation.
//!
//! A feed accumulates successive catalog pages for one list view. The
//! caller seeds it with the first page, re-initializes it whenever the
//! selector (category, search query, filters) changes, and calls
//! `load_more` from its scroll trigger. Stale responses from a superseded
//! selector are discarded by generation check.

#[allow(clippy::module_inception)]
mod feed;
mod selector;
mod state;

pub use feed::{Feed, FeedSnapshot};
pub use selector::{FeedSelector, MovieSelector, TvSelector};
pub use state::{FeedState, LoadOutcome, LoadToken};

use crate::catalog::{Movie, TvSeries};

/// Feed of movies.
pub type MovieFeed = Feed<MovieSelector>;
/// Feed of TV series.
pub type TvFeed = Feed<TvSelector>;

/// Convenience aliases for the snapshot types handed to renderers.
pub type MovieFeedSnapshot = FeedSnapshot<Movie>;
pub type TvFeedSnapshot = FeedSnapshot<TvSeries>;
