pub mod catalog;
pub mod config;
pub mod feed;
pub mod metrics;
pub mod prefs;
pub mod suggest;
pub mod testing;

pub use catalog::{
    CatalogError, FilterOptions, MetadataCatalog, Movie, MovieDetails, MultiResult, Page, Person,
    SortKey, TimeWindow, TmdbClient, TmdbConfig, TvSeries, TvSeriesDetails,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use feed::{Feed, FeedSelector, LoadOutcome, MovieFeed, MovieSelector, TvFeed, TvSelector};
pub use prefs::{
    Collection, KeyValueStore, MemoryStore, PreferenceRecord, PreferenceStore, SqliteStore,
};
pub use suggest::{SuggestConfig, Suggestion, SuggestionEngine, SuggestionKind};
