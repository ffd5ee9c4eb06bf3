//! Favorites and watchlist handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use marquee_core::{Collection, PreferenceRecord};

use crate::state::AppState;

/// List favorites.
pub async fn list_favorites(State(state): State<Arc<AppState>>) -> Json<Vec<PreferenceRecord>> {
    Json(state.prefs().list(Collection::Favorites))
}

/// Add a favorite. Idempotent by id.
pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Json(record): Json<PreferenceRecord>,
) -> (StatusCode, Json<PreferenceRecord>) {
    state.prefs().add(Collection::Favorites, record.clone());
    (StatusCode::CREATED, Json(record))
}

/// Remove a favorite. No-op when absent.
pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> StatusCode {
    state.prefs().remove(Collection::Favorites, id);
    StatusCode::NO_CONTENT
}

/// List the watchlist.
pub async fn list_watchlist(State(state): State<Arc<AppState>>) -> Json<Vec<PreferenceRecord>> {
    Json(state.prefs().list(Collection::Watchlist))
}

/// Add to the watchlist. Idempotent by id.
pub async fn add_watchlist(
    State(state): State<Arc<AppState>>,
    Json(record): Json<PreferenceRecord>,
) -> (StatusCode, Json<PreferenceRecord>) {
    state.prefs().add(Collection::Watchlist, record.clone());
    (StatusCode::CREATED, Json(record))
}

/// Remove from the watchlist. No-op when absent.
pub async fn remove_watchlist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> StatusCode {
    state.prefs().remove(Collection::Watchlist, id);
    StatusCode::NO_CONTENT
}
