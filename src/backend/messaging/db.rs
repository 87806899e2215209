//! Message Ledger
//!
//! Append-only durable store of messages, backed by SQLite. The ledger owns
//! message identity and timestamp assignment: callers supply candidate field
//! values, the ledger assigns `id` and fills in `timestamp` when absent.
//!
//! Ordering is a read-time concern. `scan_pair` sorts ascending by timestamp
//! with ledger (rowid) order breaking ties; concurrent appends for the same
//! pair may land in either rowid order when their timestamps coincide.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::shared::{Message, MessageInput, SharedError};

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn row_to_message(row: &sqlx::sqlite::SqliteRow) -> Message {
    let id: String = row.get("id");
    Message {
        id: Uuid::parse_str(&id).unwrap_or(Uuid::nil()),
        from_code: row.get("from_code"),
        to_code: row.get("to_code"),
        text: row.get("text"),
        timestamp: row.get("timestamp"),
    }
}

/// Append a message to the ledger
///
/// Validates that `fromCode`, `toCode` and `text` are all present and
/// non-empty, assigns an id, and defaults `timestamp` to the current time.
/// Nothing is persisted when validation fails.
pub async fn append_message(
    pool: &SqlitePool,
    input: &MessageInput,
) -> Result<Message, SharedError> {
    input.validate()?;

    let message = Message {
        id: Uuid::new_v4(),
        from_code: input.from_code.clone(),
        to_code: input.to_code.clone(),
        text: input.text.clone(),
        timestamp: input.timestamp.unwrap_or_else(now_millis),
    };

    sqlx::query(
        r#"
        INSERT INTO messages (id, from_code, to_code, text, timestamp)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(message.id.to_string())
    .bind(&message.from_code)
    .bind(&message.to_code)
    .bind(&message.text)
    .bind(message.timestamp)
    .execute(pool)
    .await?;

    Ok(message)
}

/// Every message between `a` and `b`, in either direction, ascending by
/// timestamp with insertion order breaking ties
pub async fn scan_pair(
    pool: &SqlitePool,
    a: &str,
    b: &str,
) -> Result<Vec<Message>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, from_code, to_code, text, timestamp
        FROM messages
        WHERE (from_code = $1 AND to_code = $2) OR (from_code = $2 AND to_code = $1)
        ORDER BY timestamp ASC, rowid ASC
        "#,
    )
    .bind(a)
    .bind(b)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_message).collect())
}

/// Every message where `code` is sender or recipient, in insertion order
///
/// No timestamp ordering is promised here; ordering is the aggregator's job.
/// Insertion order is kept so the aggregator's first-seen-wins tie policy is
/// deterministic.
pub async fn scan_touching(
    pool: &SqlitePool,
    code: &str,
) -> Result<Vec<Message>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, from_code, to_code, text, timestamp
        FROM messages
        WHERE from_code = $1 OR to_code = $1
        ORDER BY rowid ASC
        "#,
    )
    .bind(code)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_message).collect())
}

/// Delete all messages between `a` and `b`, in either direction
///
/// Returns the number of rows removed. Deleting a non-existent pair is a
/// no-op that returns 0, not an error.
pub async fn delete_pair(pool: &SqlitePool, a: &str, b: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM messages
        WHERE (from_code = $1 AND to_code = $2) OR (from_code = $2 AND to_code = $1)
        "#,
    )
    .bind(a)
    .bind(b)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Full ledger scan, for diagnostics and migration only
pub async fn all_messages(pool: &SqlitePool) -> Result<Vec<Message>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, from_code, to_code, text, timestamp
        FROM messages
        ORDER BY rowid ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_message).collect())
}
