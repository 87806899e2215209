/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/users/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * This endpoint requires a valid JWT token in the `Authorization` header.
 * The middleware has already verified it; the handler resolves the principal
 * to its account.
 */

use axum::{extract::State, response::Json, Extension};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthenticatedUser;

pub async fn me(
    State(pool): State<SqlitePool>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        gmail: user.gmail,
        code: user.code,
    }))
}
