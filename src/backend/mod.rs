//! Backend Module
//!
//! The complete server: an axum HTTP application around the messaging core.
//!
//! # Architecture
//!
//! - **`server`** - initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`messaging`** - message ledger, conversation aggregation, delivery
//! - **`presence`** - code -> live connection registry
//! - **`realtime`** - SSE subscription for live delivery
//! - **`auth`** - JWT sessions, users, signup/login
//! - **`contacts`** - owned-pair contact registry
//! - **`middleware`** - bearer-token auth and request metrics
//! - **`error`** - API error types and HTTP conversion
//!
//! # State Management
//!
//! All shared state lives in [`server::AppState`]: the SQLite pool, the
//! presence registry and the metrics handle. The registry and metrics are
//! internally synchronized (mutex-guarded maps, atomics); the pool is
//! thread-safe by itself. Nothing in this module is a process-level global.

pub mod auth;
pub mod contacts;
pub mod error;
pub mod messaging;
pub mod middleware;
pub mod presence;
pub mod realtime;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{create_app, AppState};
