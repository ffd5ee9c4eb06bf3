use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handlers, live, movies, people, prefs, search, tv};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Movies
        .route("/movies", get(movies::list_movies))
        .route("/movies/{id}", get(movies::movie_details))
        .route("/movies/{id}/credits", get(movies::movie_credits))
        .route("/movies/{id}/videos", get(movies::movie_videos))
        .route("/movies/{id}/reviews", get(movies::movie_reviews))
        // TV
        .route("/tv", get(tv::list_tv))
        .route("/tv/{id}", get(tv::tv_details))
        .route("/tv/{id}/credits", get(tv::tv_credits))
        .route("/tv/{id}/videos", get(tv::tv_videos))
        .route("/tv/{id}/reviews", get(tv::tv_reviews))
        .route("/tv/{id}/season/{season}", get(tv::season_details))
        .route(
            "/tv/{id}/season/{season}/episode/{episode}",
            get(tv::episode_details),
        )
        // People
        .route("/people", get(people::search_people))
        .route("/people/{id}", get(people::person_details))
        .route("/people/{id}/movie-credits", get(people::person_movie_credits))
        .route("/people/{id}/tv-credits", get(people::person_tv_credits))
        // Genres
        .route("/genres/movies", get(movies::movie_genres))
        .route("/genres/tv", get(tv::tv_genres))
        // Search
        .route("/search/multi", get(search::search_multi))
        .route("/search/suggestions", get(search::suggestions))
        .route("/search/live", get(live::live_search))
        // Preferences
        .route("/favorites", get(prefs::list_favorites))
        .route("/favorites", post(prefs::add_favorite))
        .route("/favorites/{id}", delete(prefs::remove_favorite))
        .route("/watchlist", get(prefs::list_watchlist))
        .route("/watchlist", post(prefs::add_watchlist))
        .route("/watchlist/{id}", delete(prefs::remove_watchlist))
        // Metrics
        .route("/metrics", get(handlers::metrics))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
