/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Build the presence registry and metrics handle
 * 2. Assemble `AppState` around the database pool
 * 3. Create the router with all routes and middleware
 *
 * `create_app` takes the pool so tests can hand in an in-memory database.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::middleware::Metrics;
use crate::backend::presence::PresenceRegistry;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;

/// Create the axum application with all routes and state configured
pub fn create_app(db_pool: SqlitePool) -> Router {
    let app_state = AppState {
        db_pool,
        presence: PresenceRegistry::new(),
        metrics: Metrics::new(),
    };

    tracing::info!("application state initialized");

    create_router(app_state)
}
