//! Delivery Router
//!
//! The send path: durable write first, then best-effort push to every live
//! connection of the recipient. There is no acknowledgement, retry or queue;
//! an offline recipient reads the message from the ledger later. A failed
//! push to one connection never affects the others and never fails the send,
//! since durability has already succeeded.

use sqlx::SqlitePool;

use crate::backend::messaging::db;
use crate::backend::presence::PresenceRegistry;
use crate::shared::{Message, MessageInput, SharedError};

/// Persist a message and fan it out to the recipient's live connections
///
/// Returns the persisted message so the sender's client can render it
/// without waiting for an echo. Fails with a validation error before any
/// write, or a persistence error when the durable write fails; neither is
/// retried here.
pub async fn send_message(
    pool: &SqlitePool,
    registry: &PresenceRegistry,
    input: &MessageInput,
) -> Result<Message, SharedError> {
    let message = db::append_message(pool, input).await?;

    let connections = registry.lookup(&message.to_code);
    if !connections.is_empty() {
        tracing::debug!(
            "pushing message {} to {} live connection(s) for code {}",
            message.id,
            connections.len(),
            message.to_code
        );
    }
    for sender in connections {
        if sender.send(message.clone()).is_err() {
            // Receiver already gone; the connection is closing and will be
            // unregistered by its own teardown.
            tracing::debug!("dropping push to a closed connection for code {}", message.to_code);
        }
    }

    Ok(message)
}

/// Delete the whole thread between `a` and `b`
///
/// Always succeeds, returning the number of messages removed (0 when the
/// pair has no history).
pub async fn delete_pair_thread(
    pool: &SqlitePool,
    a: &str,
    b: &str,
) -> Result<u64, SharedError> {
    let deleted = db::delete_pair(pool, a, b).await?;
    tracing::info!("deleted {} message(s) between {} and {}", deleted, a, b);
    Ok(deleted)
}
