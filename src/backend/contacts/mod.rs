//! Contact List
//!
//! Simple owned-pair registry plus its HTTP handlers.

pub mod db;
pub mod handlers;
