/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the single state container handed to the router: the ledger
 * pool, the presence registry and the metrics handle, all created once per
 * process in `init.rs` and shared by cloning. The `FromRef` implementations
 * let handlers extract just the part they need.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::middleware::Metrics;
use crate::backend::presence::PresenceRegistry;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Message ledger and account store
    pub db_pool: SqlitePool,
    /// Code -> live connections mapping, in-memory only
    pub presence: PresenceRegistry,
    /// Process-wide request counters
    pub metrics: Metrics,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for PresenceRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.presence.clone()
    }
}

impl FromRef<AppState> for Metrics {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.metrics.clone()
    }
}
