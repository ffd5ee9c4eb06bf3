//! Prometheus metrics for observability.
//!
//! This module provides the server-side metrics (live-search connection
//! counts) and the shared registry exposing them together with the core
//! collectors at `GET /metrics`.

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Active live-search WebSocket connections.
pub static LIVE_SEARCH_CONNECTIONS_ACTIVE: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "marquee_live_search_connections_active",
        "Number of active live-search WebSocket connections",
    )
    .unwrap()
});

/// Total live-search WebSocket connections accepted.
pub static LIVE_SEARCH_CONNECTIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "marquee_live_search_connections_total",
        "Total live-search WebSocket connections accepted",
    )
    .unwrap()
});

/// Total suggestion frames pushed to live-search clients.
pub static LIVE_SEARCH_FRAMES_SENT: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "marquee_live_search_frames_sent_total",
        "Total suggestion frames pushed to live-search clients",
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    marquee_core::metrics::register(registry);
    let _ = registry.register(Box::new(LIVE_SEARCH_CONNECTIONS_ACTIVE.clone()));
    let _ = registry.register(Box::new(LIVE_SEARCH_CONNECTIONS_TOTAL.clone()));
    let _ = registry.register(Box::new(LIVE_SEARCH_FRAMES_SENT.clone()));
}

/// Render the registry in the Prometheus text exposition format.
pub fn render() -> String {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if encoder.encode(&REGISTRY.gather(), &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
