//! Contact HTTP Handlers
//!
//! - `POST /api/contacts` - add a contact pair
//! - `GET /api/contacts?ownerCode=` - list a user's contacts
//! - `DELETE /api/contacts` - remove a contact pair

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::contacts::db;
use crate::backend::error::ApiError;
use crate::shared::Contact;

/// Body for add/remove: the owned pair
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPairRequest {
    pub owner_code: String,
    pub peer_code: String,
}

/// Query parameter for listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContactsParams {
    pub owner_code: String,
}

/// Response for contact removal
#[derive(Debug, Serialize)]
pub struct RemoveContactResponse {
    pub removed: bool,
}

fn validate_pair(request: &ContactPairRequest) -> Result<(), ApiError> {
    if request.owner_code.is_empty() || request.peer_code.is_empty() {
        return Err(ApiError::bad_request("ownerCode and peerCode are required"));
    }
    Ok(())
}

pub async fn handle_add_contact(
    State(pool): State<SqlitePool>,
    Json(request): Json<ContactPairRequest>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    validate_pair(&request)?;

    let contact = db::add_contact(&pool, &request.owner_code, &request.peer_code).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn handle_list_contacts(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListContactsParams>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    if params.owner_code.is_empty() {
        return Err(ApiError::bad_request("ownerCode is required"));
    }

    let contacts = db::list_contacts(&pool, &params.owner_code).await?;
    Ok(Json(contacts))
}

pub async fn handle_remove_contact(
    State(pool): State<SqlitePool>,
    Json(request): Json<ContactPairRequest>,
) -> Result<Json<RemoveContactResponse>, ApiError> {
    validate_pair(&request)?;

    let removed = db::remove_contact(&pool, &request.owner_code, &request.peer_code).await?;
    Ok(Json(RemoveContactResponse { removed }))
}
