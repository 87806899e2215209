/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/users/signup.
 *
 * # Registration Process
 *
 * 1. Validate the gmail address and password
 * 2. Check if the user already exists
 * 3. Hash the password using bcrypt
 * 4. Create the user with a fresh six-digit code
 * 5. Answer 201 with a token so the client is authenticated immediately
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_gmail};
use crate::backend::error::ApiError;

pub async fn signup(
    State(pool): State<SqlitePool>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if request.gmail.is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request("Gmail and password are required"));
    }
    if !request.gmail.contains('@') {
        return Err(ApiError::bad_request("Invalid gmail address"));
    }

    if get_user_by_gmail(&pool, &request.gmail).await?.is_some() {
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {:?}", e);
        ApiError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Error creating user")
    })?;

    let user = create_user(&pool, &request.gmail, &password_hash).await?;
    tracing::info!("user {} signed up with code {}", user.gmail, user.code);

    let token = create_token(user.id, &user.code).map_err(|e| {
        tracing::error!("token generation failed: {:?}", e);
        ApiError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Error creating token")
    })?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            code: user.code.clone(),
            user: UserResponse {
                id: user.id.to_string(),
                gmail: user.gmail,
                code: user.code,
            },
        }),
    ))
}
