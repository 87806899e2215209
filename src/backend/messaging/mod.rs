//! Messaging Core
//!
//! The message ledger, the conversation aggregator, the delivery router and
//! their HTTP handlers.
//!
//! - **`db`** - durable message ledger (append, scans, delete-by-pair)
//! - **`conversations`** - per-peer latest-message aggregation
//! - **`delivery`** - send path: persist, then fan out to live connections
//! - **`handlers`** - axum handlers for the messaging routes

pub mod conversations;
pub mod db;
pub mod delivery;
pub mod handlers;
