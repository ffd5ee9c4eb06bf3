//! Multi-type search and suggestion handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use marquee_core::catalog::{MultiResult, Page};
use marquee_core::suggest::{classify, Suggestion};

use super::{bad_request, catalog_error, ErrorResponse};
use crate::state::AppState;

/// Query parameters for search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub page: Option<u32>,
}

/// Multi-type search across movies, TV series and people.
pub async fn search_multi(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Page<MultiResult>>, (StatusCode, Json<ErrorResponse>)> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(bad_request("query must not be empty"));
    }
    let page = state
        .catalog()
        .search_multi(query, params.page.unwrap_or(1).max(1))
        .await
        .map_err(catalog_error)?;
    Ok(Json(page))
}

/// Classified search suggestions, capped to the configured limit.
///
/// Soft-fail endpoint: short queries and upstream failures both yield an
/// empty list with 200, never an error — the dropdown just stays closed.
pub async fn suggestions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Suggestion>> {
    let config = state.suggest_config();
    let query = params.query.trim();
    if query.chars().count() < config.min_query_len {
        return Json(Vec::new());
    }

    match state.catalog().search_multi(query, 1).await {
        Ok(page) => Json(classify(&page.results, config.max_suggestions)),
        Err(e) => {
            debug!(error = %e, "suggestion fetch failed");
            Json(Vec::new())
        }
    }
}
