/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/users/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by gmail address
 * 2. Verify the password using bcrypt
 * 3. Generate a JWT token
 *
 * Unknown gmail and wrong password both answer 401 without distinguishing
 * which.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_gmail;
use crate::backend::error::ApiError;

pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.gmail.is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request("Gmail and password are required"));
    }

    let user = get_user_by_gmail(&pool, &request.gmail)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("password verification failed: {:?}", e);
        ApiError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Error logging in")
    })?;
    if !valid {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = create_token(user.id, &user.code).map_err(|e| {
        tracing::error!("token generation failed: {:?}", e);
        ApiError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Error creating token")
    })?;

    tracing::info!("user {} logged in", user.gmail);

    Ok(Json(AuthResponse {
        token,
        code: user.code.clone(),
        user: UserResponse {
            id: user.id.to_string(),
            gmail: user.gmail,
            code: user.code,
        },
    }))
}
