//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog API requests (counts, latency)
//! - Feed pagination (load outcomes)
//! - Suggestion fetches (outcomes)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

// =============================================================================
// Catalog Metrics
// =============================================================================

/// Catalog API requests by endpoint and result.
pub static CATALOG_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("marquee_catalog_requests_total", "Total catalog API requests"),
        &["endpoint", "result"], // result: "ok", "not_found", "rate_limited", "http_error", "parse_error", "error"
    )
    .unwrap()
});

/// Catalog API request duration in seconds.
pub static CATALOG_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "marquee_catalog_request_duration_seconds",
            "Duration of catalog API requests",
        )
        .buckets(vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["endpoint"],
    )
    .unwrap()
});

// =============================================================================
// Feed Metrics
// =============================================================================

/// Feed load-more attempts by outcome.
pub static FEED_LOADS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("marquee_feed_loads_total", "Total feed load-more attempts"),
        &["result"], // "loaded", "skipped", "exhausted", "stale", "failed"
    )
    .unwrap()
});

// =============================================================================
// Suggestion Metrics
// =============================================================================

/// Suggestion fetches by outcome.
pub static SUGGESTION_FETCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "marquee_suggestion_fetches_total",
            "Total suggestion fetches",
        ),
        &["result"], // "ok", "stale", "error"
    )
    .unwrap()
});

/// Register all core collectors on the given registry.
///
/// Registration errors (already registered) are ignored so multiple
/// callers can share a registry.
pub fn register(registry: &Registry) {
    let _ = registry.register(Box::new(CATALOG_REQUESTS.clone()));
    let _ = registry.register(Box::new(CATALOG_REQUEST_DURATION.clone()));
    let _ = registry.register(Box::new(FEED_LOADS.clone()));
    let _ = registry.register(Box::new(SUGGESTION_FETCHES.clone()));
}
