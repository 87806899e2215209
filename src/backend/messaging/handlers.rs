//! Messaging HTTP Handlers
//!
//! The four operations of the messaging API:
//!
//! - `POST /api/messages` - send a message
//! - `GET /api/messages/thread?a&b` - thread between two codes
//! - `DELETE /api/messages/thread?a&b` - delete a thread
//! - `GET /api/messages/conversations?code` - per-peer conversation list

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::error::ApiError;
use crate::backend::messaging::{conversations, delivery};
use crate::backend::messaging::db;
use crate::backend::server::state::AppState;
use crate::shared::{ConversationSummary, Message, MessageInput};

/// Query parameters identifying a pair of codes
#[derive(Debug, Deserialize)]
pub struct ThreadParams {
    pub a: String,
    pub b: String,
}

/// Query parameter identifying one code
#[derive(Debug, Deserialize)]
pub struct ConversationsParams {
    pub code: String,
}

/// Response body for thread deletion
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteThreadResponse {
    pub deleted_count: u64,
}

/// Send a message (POST /api/messages)
///
/// Persists the message and pushes it to the recipient's live connections.
/// Responds 201 with the persisted message, or 400 when a required field is
/// missing or empty.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Json(input): Json<MessageInput>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let message = delivery::send_message(&state.db_pool, &state.presence, &input).await?;
    tracing::info!(
        "message {} sent from {} to {}",
        message.id,
        message.from_code,
        message.to_code
    );
    Ok((StatusCode::CREATED, Json(message)))
}

/// Get the thread between two codes (GET /api/messages/thread)
///
/// Both query params must be present and non-empty; the thread itself may
/// be empty and is returned as `[]`, ascending by timestamp.
pub async fn handle_get_thread(
    State(pool): State<SqlitePool>,
    Query(params): Query<ThreadParams>,
) -> Result<Json<Vec<Message>>, ApiError> {
    if params.a.is_empty() || params.b.is_empty() {
        return Err(ApiError::bad_request("query params a and b (codes) are required"));
    }

    let thread = db::scan_pair(&pool, &params.a, &params.b).await?;
    Ok(Json(thread))
}

/// Delete the thread between two codes (DELETE /api/messages/thread)
///
/// Responds 200 even when nothing matched; the count tells the caller what
/// happened.
pub async fn handle_delete_thread(
    State(pool): State<SqlitePool>,
    Query(params): Query<ThreadParams>,
) -> Result<Json<DeleteThreadResponse>, ApiError> {
    if params.a.is_empty() || params.b.is_empty() {
        return Err(ApiError::bad_request("query params a and b (codes) are required"));
    }

    let deleted_count = delivery::delete_pair_thread(&pool, &params.a, &params.b).await?;
    Ok(Json(DeleteThreadResponse { deleted_count }))
}

/// List conversations for a code (GET /api/messages/conversations)
pub async fn handle_list_conversations(
    State(pool): State<SqlitePool>,
    Query(params): Query<ConversationsParams>,
) -> Result<Json<Vec<ConversationSummary>>, ApiError> {
    if params.code.is_empty() {
        return Err(ApiError::bad_request("query param code is required"));
    }

    let list = conversations::list_conversations(&pool, &params.code).await?;
    Ok(Json(list))
}
