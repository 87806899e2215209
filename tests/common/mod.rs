//! Common test utilities
//!
//! Shared fixtures for the integration suites: an in-memory database and a
//! test server wrapping the full application, plus auth helpers.

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
