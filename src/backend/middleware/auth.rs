/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and attaches the authenticated principal to
 * request extensions for handlers to use.
 */

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::ApiError;

/// Authenticated principal extracted from the token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub code: String,
}

/// Reject requests without a valid bearer token
///
/// On success the request carries an `AuthenticatedUser` extension for
/// downstream handlers.
pub async fn auth_middleware(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::unauthorized("Not authorized, token missing")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        ApiError::unauthorized("Not authorized, token malformed")
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("token verification failed: {:?}", e);
        ApiError::unauthorized("Not authorized, token failed")
    })?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| ApiError::unauthorized("Not authorized, token failed"))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        code: claims.code,
    });

    Ok(next.run(request).await)
}
