/**
 * Backend Error Types
 *
 * This module defines error types specific to the HTTP layer.
 * These errors are produced by handlers and can be converted to HTTP responses.
 *
 * # Error Types
 *
 * - `HandlerError` - Errors raised directly by handlers, with an explicit status
 * - `SharedError` - Errors from the messaging core (validation, persistence)
 * - `DatabaseError` - Raw database errors from handler-level queries
 * - `SerializationError` - JSON encoding and decoding failures
 *
 * # Status Mapping
 *
 * Each variant knows the HTTP status it maps to:
 * - Validation failures map to 400 Bad Request
 * - Persistence and serialization failures map to 500 Internal Server Error
 * - Auth failures and conflicts carry their status in `HandlerError`
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Handler error with an explicit status (missing params, auth failures, conflicts)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Error from the messaging core (validation, persistence)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Raw database error from a handler-level query
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ApiError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// Create a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// Create a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::CONFLICT, message)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::PersistenceError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::DatabaseError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }
}
