//! Codeline
//!
//! A small messenger backend where users address each other by a six-digit
//! code. Messages are durably recorded in a SQLite ledger and pushed to the
//! recipient's live connections over Server-Sent Events when any are open;
//! offline recipients catch up by reading the ledger.

pub mod backend;
pub mod shared;
