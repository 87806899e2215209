//! Conversation Aggregator
//!
//! Reduces every message touching a code to one latest-message record per
//! distinct peer, sorted by recency descending. This is a full linear scan
//! with no index; fine at the scale this server targets, and a known
//! ceiling beyond it.

use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::backend::messaging::db;
use crate::shared::{ConversationSummary, Message, SharedError};

/// Reduce messages touching `code` to one summary per peer
///
/// A stored summary is replaced only when a later message has a strictly
/// greater timestamp, so on an exact tie the first message seen wins. The
/// result is sorted by `lastTimestamp` descending; the sort is stable, so
/// exact ties keep their relative order.
pub fn summarize_conversations(code: &str, messages: &[Message]) -> Vec<ConversationSummary> {
    let mut best: HashMap<&str, ConversationSummary> = HashMap::new();

    for message in messages {
        let peer = if message.from_code == code {
            message.to_code.as_str()
        } else {
            message.from_code.as_str()
        };

        let replace = match best.get(peer) {
            Some(existing) => message.timestamp > existing.last_timestamp,
            None => true,
        };
        if replace {
            best.insert(
                peer,
                ConversationSummary {
                    peer_code: peer.to_string(),
                    last_text: message.text.clone(),
                    last_timestamp: message.timestamp,
                },
            );
        }
    }

    let mut list: Vec<ConversationSummary> = best.into_values().collect();
    list.sort_by(|a, b| b.last_timestamp.cmp(&a.last_timestamp));
    list
}

/// Scan the ledger for `code` and aggregate into the conversation list
pub async fn list_conversations(
    pool: &SqlitePool,
    code: &str,
) -> Result<Vec<ConversationSummary>, SharedError> {
    let messages = db::scan_touching(pool, code).await?;
    Ok(summarize_conversations(code, &messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn message(from: &str, to: &str, text: &str, timestamp: i64) -> Message {
        Message {
            id: Uuid::new_v4(),
            from_code: from.to_string(),
            to_code: to.to_string(),
            text: text.to_string(),
            timestamp,
        }
    }

    #[test]
    fn test_empty_input_gives_empty_list() {
        assert!(summarize_conversations("111111", &[]).is_empty());
    }

    #[test]
    fn test_one_summary_per_peer_with_latest_text() {
        let messages = vec![
            message("111111", "222222", "Hi", 1000),
            message("222222", "111111", "Hey", 2000),
        ];

        let list = summarize_conversations("111111", &messages);
        assert_eq!(
            list,
            vec![ConversationSummary {
                peer_code: "222222".to_string(),
                last_text: "Hey".to_string(),
                last_timestamp: 2000,
            }]
        );
    }

    #[test]
    fn test_sorted_by_recency_descending() {
        let messages = vec![
            message("111111", "222222", "old", 1000),
            message("333333", "111111", "newer", 3000),
            message("111111", "444444", "middle", 2000),
        ];

        let list = summarize_conversations("111111", &messages);
        let peers: Vec<&str> = list.iter().map(|s| s.peer_code.as_str()).collect();
        assert_eq!(peers, vec!["333333", "444444", "222222"]);
    }

    #[test]
    fn test_exact_timestamp_tie_first_seen_wins() {
        // Strict > comparison: the second message with the same timestamp
        // must not replace the first.
        let messages = vec![
            message("111111", "222222", "first", 1000),
            message("222222", "111111", "second", 1000),
        ];

        let list = summarize_conversations("111111", &messages);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].last_text, "first");
    }

    #[test]
    fn test_no_duplicate_peers() {
        let messages = vec![
            message("111111", "222222", "a", 1),
            message("111111", "222222", "b", 2),
            message("222222", "111111", "c", 3),
            message("111111", "333333", "d", 4),
        ];

        let list = summarize_conversations("111111", &messages);
        let mut peers: Vec<&str> = list.iter().map(|s| s.peer_code.as_str()).collect();
        peers.sort();
        peers.dedup();
        assert_eq!(peers.len(), list.len());
    }
}
