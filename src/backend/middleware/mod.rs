//! Request Processing Middleware

pub mod auth;
pub mod metrics;

pub use auth::{auth_middleware, AuthenticatedUser};
pub use metrics::{metrics_middleware, Metrics};
