/**
 * Presence Registry
 *
 * This module maps a code to its live connections. A code can hold several
 * connections at once (multi-tab); the registry is in-memory only and
 * empties on restart. Each connection is an unbounded sender feeding one
 * SSE stream.
 *
 * # Concurrency
 *
 * Shared via `Clone` and guarded by a `std::sync::Mutex`; every operation
 * is a short map mutation, so no async locking is needed.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::shared::Message;

/// Identifier for one live connection
pub type ConnectionId = Uuid;

/// Push handle for one live connection
pub type ConnectionSender = mpsc::UnboundedSender<Message>;

/// Code -> live connections mapping
#[derive(Clone, Default)]
pub struct PresenceRegistry {
    inner: Arc<Mutex<HashMap<String, HashMap<ConnectionId, ConnectionSender>>>>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection to the set for `code`
    ///
    /// Registering the same connection id again under another code adds it
    /// to that code's set as well; only `unregister` detaches it.
    pub fn register(&self, code: &str, connection_id: ConnectionId, sender: ConnectionSender) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .entry(code.to_string())
            .or_default()
            .insert(connection_id, sender);
        tracing::debug!("connection {} registered under code {}", connection_id, code);
    }

    /// Live push handles for `code`, possibly empty
    pub fn lookup(&self, code: &str) -> Vec<ConnectionSender> {
        let inner = self.inner.lock().unwrap();
        inner
            .get(code)
            .map(|connections| connections.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Remove a connection from every code set it belongs to
    ///
    /// Never errors; removing an absent connection is a no-op. Code entries
    /// left empty are dropped from the map.
    pub fn unregister(&self, connection_id: ConnectionId) {
        let mut inner = self.inner.lock().unwrap();
        for connections in inner.values_mut() {
            connections.remove(&connection_id);
        }
        inner.retain(|_, connections| !connections.is_empty());
        tracing::debug!("connection {} unregistered", connection_id);
    }

    /// Number of live connections for `code`
    pub fn connection_count(&self, code: &str) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.get(code).map(|c| c.len()).unwrap_or(0)
    }
}
