//! People search and detail handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use marquee_core::catalog::{Page, Person, PersonCredits, PersonDetails};

use super::{bad_request, catalog_error, ErrorResponse};
use crate::state::AppState;

/// Query parameters for people search.
#[derive(Debug, Deserialize)]
pub struct PeopleSearchParams {
    pub query: String,
    pub page: Option<u32>,
}

/// Search people by name.
pub async fn search_people(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PeopleSearchParams>,
) -> Result<Json<Page<Person>>, (StatusCode, Json<ErrorResponse>)> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(bad_request("query must not be empty"));
    }
    let page = state
        .catalog()
        .search_people(query, params.page.unwrap_or(1).max(1))
        .await
        .map_err(catalog_error)?;
    Ok(Json(page))
}

/// Person details.
pub async fn person_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<PersonDetails>, (StatusCode, Json<ErrorResponse>)> {
    let details = state
        .catalog()
        .person_details(id)
        .await
        .map_err(catalog_error)?;
    Ok(Json(details))
}

/// A person's movie filmography.
pub async fn person_movie_credits(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<PersonCredits>, (StatusCode, Json<ErrorResponse>)> {
    let credits = state
        .catalog()
        .person_movie_credits(id)
        .await
        .map_err(catalog_error)?;
    Ok(Json(credits))
}

/// A person's TV filmography.
pub async fn person_tv_credits(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<PersonCredits>, (StatusCode, Json<ErrorResponse>)> {
    let credits = state
        .catalog()
        .person_tv_credits(id)
        .await
        .map_err(catalog_error)?;
    Ok(Json(credits))
}
