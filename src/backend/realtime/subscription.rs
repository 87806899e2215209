/**
 * Live Delivery Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription handler
 * for the `/realtime` endpoint. Each open tab holds one connection.
 *
 * # Server-Sent Events (SSE)
 *
 * `GET /realtime?code=` registers the connection in the presence registry
 * under that code; every message sent to the code while the stream is open
 * arrives as a `message` event. The registration is dropped when the client
 * disconnects, so a code with no open tabs simply has no live connections.
 */

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use serde::Deserialize;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::presence::{ConnectionId, PresenceRegistry};
use crate::shared::Message;

/// Query parameters for the subscription endpoint
#[derive(Debug, Deserialize)]
pub struct SubscribeParams {
    pub code: String,
}

/// Unregisters the connection when the SSE stream is dropped
struct ConnectionGuard {
    registry: PresenceRegistry,
    connection_id: ConnectionId,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.registry.unregister(self.connection_id);
    }
}

/// Handle a live delivery subscription (GET /realtime?code=)
///
/// The stream yields one `message` event per delivered message. Axum's
/// keep-alive injects comment lines to hold the connection open between
/// deliveries.
pub async fn handle_presence_subscription(
    State(registry): State<PresenceRegistry>,
    Query(params): Query<SubscribeParams>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    if params.code.is_empty() {
        return Err(ApiError::bad_request("query param code is required"));
    }

    let connection_id = Uuid::new_v4();
    let (tx, rx) = mpsc::unbounded_channel::<Message>();
    registry.register(&params.code, connection_id, tx);
    tracing::info!(
        "code {} subscribed for live delivery (connection {})",
        params.code,
        connection_id
    );

    let guard = ConnectionGuard {
        registry: registry.clone(),
        connection_id,
    };

    let stream = stream::unfold((rx, guard), |(mut rx, guard)| async move {
        match rx.recv().await {
            Some(message) => {
                let event = Event::default().event("message").json_data(&message);
                Some((event, (rx, guard)))
            }
            // All senders dropped; end the stream (guard unregisters on drop).
            None => None,
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
