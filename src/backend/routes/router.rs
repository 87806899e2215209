/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. `/health` and `/metrics` diagnostics
 * 2. `/realtime` live delivery subscription
 * 3. `/api/...` routes (auth, messages, contacts)
 *
 * # Middleware
 *
 * Every request passes through request tracing and the metrics middleware.
 * CORS is permissive since the browser client is served from a different
 * origin.
 */

use axum::{middleware, response::Json, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::middleware::metrics::{handle_metrics, metrics_middleware};
use crate::backend::realtime::handle_presence_subscription;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// GET /health
async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "codeline-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Create the axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(handle_health))
        .route("/metrics", get(handle_metrics))
        .route("/realtime", get(handle_presence_subscription));

    let router = configure_api_routes(router);

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn_with_state(
                    app_state.clone(),
                    metrics_middleware,
                )),
        )
        .with_state(app_state)
}
