/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Users sign up with
 * a gmail address and receive a six-digit code; the code is the messaging
 * address, not the account id.
 */

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// A user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Gmail address (unique)
    pub gmail: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Six-digit messaging code (unique)
    pub code: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> User {
    let id: String = row.get("id");
    User {
        id: Uuid::parse_str(&id).unwrap_or(Uuid::nil()),
        gmail: row.get("gmail"),
        password_hash: row.get("password_hash"),
        code: row.get("code"),
        created_at: row.get("created_at"),
    }
}

/// Generate a six-digit code not yet taken by any user
///
/// Codes are drawn from 100000..999999 and retried on collision. At the
/// scale this server targets the retry loop terminates almost immediately.
pub async fn generate_unique_code(pool: &SqlitePool) -> Result<String, sqlx::Error> {
    loop {
        let candidate = rand::thread_rng().gen_range(100_000..1_000_000).to_string();

        let taken = sqlx::query("SELECT code FROM users WHERE code = $1")
            .bind(&candidate)
            .fetch_optional(pool)
            .await?;

        if taken.is_none() {
            return Ok(candidate);
        }
    }
}

/// Create a new user with a freshly assigned code
pub async fn create_user(
    pool: &SqlitePool,
    gmail: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let code = generate_unique_code(pool).await?;
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, gmail, password_hash, code, created_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id.to_string())
    .bind(gmail)
    .bind(password_hash)
    .bind(&code)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id,
        gmail: gmail.to_string(),
        password_hash: password_hash.to_string(),
        code,
        created_at: now,
    })
}

/// Look up a user by gmail address
pub async fn get_user_by_gmail(
    pool: &SqlitePool,
    gmail: &str,
) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, gmail, password_hash, code, created_at
        FROM users
        WHERE gmail = $1
        "#,
    )
    .bind(gmail)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_user))
}

/// Look up a user by id
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, gmail, password_hash, code, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_user))
}
