//! WebSocket live search.
//!
//! Each connection gets its own debounced suggestion engine: the client
//! sends the raw text of the search box as it changes, the server
//! debounces, queries the catalog and pushes classified suggestion lists
//! back as JSON frames.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

use marquee_core::SuggestionEngine;

use crate::metrics::{
    LIVE_SEARCH_CONNECTIONS_ACTIVE, LIVE_SEARCH_CONNECTIONS_TOTAL, LIVE_SEARCH_FRAMES_SENT,
};
use crate::state::AppState;

/// WebSocket upgrade handler.
pub async fn live_search(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Handle a single live-search connection.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let engine = SuggestionEngine::new(state.catalog(), state.suggest_config());
    let mut updates = engine.subscribe();

    let (mut sender, mut receiver) = socket.split();

    LIVE_SEARCH_CONNECTIONS_TOTAL.inc();
    LIVE_SEARCH_CONNECTIONS_ACTIVE.inc();
    info!("live-search client connected");

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let suggestions = updates.borrow_and_update().clone();
                match serde_json::to_string(&suggestions) {
                    Ok(json) => {
                        if sender.send(Message::Text(json.into())).await.is_err() {
                            debug!("live-search send failed, client disconnected");
                            break;
                        }
                        LIVE_SEARCH_FRAMES_SENT.inc();
                    }
                    Err(e) => {
                        warn!("failed to serialize suggestions: {}", e);
                    }
                }
            }
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        engine.input(&text);
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        debug!("live-search client closed");
                        break;
                    }
                    Some(Ok(_)) => {
                        // Ignore binary/ping/pong frames.
                    }
                    Some(Err(e)) => {
                        warn!("live-search receive error: {}", e);
                        break;
                    }
                }
            }
        }
    }

    LIVE_SEARCH_CONNECTIONS_ACTIVE.dec();
    info!("live-search client disconnected");
}
