//! Contact Wire Type
//!
//! A contact is an owned pair of codes. `createdAt` is epoch milliseconds.

use serde::{Deserialize, Serialize};

/// One entry in a user's contact list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub owner_code: String,
    pub peer_code: String,
    pub created_at: i64,
}
