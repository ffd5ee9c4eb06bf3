//! Debounced search suggestions.
//!
//! Keystrokes go in, a capped list of classified movie/TV/person
//! suggestions comes out after a quiet period. Suggestion fetches fail
//! soft: an upstream error clears the list and never surfaces to the rest
//! of the page.

mod engine;
mod types;

pub use engine::{SuggestConfig, SuggestionEngine};
pub use types::{classify, Suggestion, SuggestionKind};
