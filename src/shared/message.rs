//! Message Wire Types
//!
//! The message record and the derived conversation summary. Field names are
//! part of the wire contract (`fromCode`, `toCode`, `text`, `timestamp`,
//! `peerCode`, `lastText`, `lastTimestamp`) and must not change.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// A persisted message between two codes
///
/// Once written a message is immutable; only bulk deletion by pair removes it.
/// The ledger owns `id` and `timestamp` assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Ledger-assigned opaque identifier
    pub id: Uuid,
    /// Sender's code
    pub from_code: String,
    /// Recipient's code
    pub to_code: String,
    /// Message body, never empty
    pub text: String,
    /// Epoch milliseconds, assigned at ingestion when the caller supplies none
    pub timestamp: i64,
}

/// Candidate field values for a message about to be appended
///
/// This doubles as the `POST /api/messages` request body. `timestamp` is
/// optional; the ledger fills in the current time when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageInput {
    pub from_code: String,
    pub to_code: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl MessageInput {
    /// Check that all required fields are present and non-empty
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.from_code.is_empty() {
            return Err(SharedError::validation("fromCode", "fromCode is required"));
        }
        if self.to_code.is_empty() {
            return Err(SharedError::validation("toCode", "toCode is required"));
        }
        if self.text.is_empty() {
            return Err(SharedError::validation("text", "text is required"));
        }
        Ok(())
    }
}

/// Latest-message record for one peer of a given owner code
///
/// Derived per request by the conversation aggregator; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub peer_code: String,
    pub last_text: String,
    pub last_timestamp: i64,
}
