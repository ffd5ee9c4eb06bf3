pub mod handlers;
pub mod live;
pub mod movies;
pub mod people;
pub mod prefs;
pub mod routes;
pub mod search;
pub mod tv;

pub use routes::create_router;

use axum::http::StatusCode;
use axum::Json;
use marquee_core::CatalogError;
use serde::Serialize;

/// Error response body shared by all handlers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map an upstream catalog error to an HTTP response.
///
/// Not-found maps to 404 (the detail-page fallback), rate limiting to
/// 429, configuration problems to 500, and everything else reaching us
/// from upstream to 502.
pub(crate) fn catalog_error(err: CatalogError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        CatalogError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
        CatalogError::HttpError(_) | CatalogError::ApiError { .. } | CatalogError::ParseError(_) => {
            StatusCode::BAD_GATEWAY
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// 400 with a message.
pub(crate) fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
