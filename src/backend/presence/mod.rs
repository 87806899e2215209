//! Presence tracking for live connections

pub mod registry;

pub use registry::{ConnectionId, ConnectionSender, PresenceRegistry};
