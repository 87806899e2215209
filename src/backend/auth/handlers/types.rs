/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across the signup, login, and me handlers.
 */

use serde::{Deserialize, Serialize};

/// Signup request body
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub gmail: String,
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub gmail: String,
    pub password: String,
}

/// User info returned to clients (never includes the password hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub gmail: String,
    pub code: String,
}

/// Response for signup and login: a bearer token plus the user's code
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub code: String,
    pub user: UserResponse,
}
