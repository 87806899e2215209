/**
 * Database Operations for Contacts
 *
 * This module provides database operations for the owned-pair contact
 * registry: each row says "owner knows peer". Adding an existing pair is a
 * no-op that returns the pair unchanged.
 */

use sqlx::{Row, SqlitePool};

use crate::backend::messaging::db::now_millis;
use crate::shared::Contact;

fn row_to_contact(row: &sqlx::sqlite::SqliteRow) -> Contact {
    Contact {
        owner_code: row.get("owner_code"),
        peer_code: row.get("peer_code"),
        created_at: row.get("created_at"),
    }
}

/// Add a contact pair, keeping the existing row when it is already present
pub async fn add_contact(
    pool: &SqlitePool,
    owner_code: &str,
    peer_code: &str,
) -> Result<Contact, sqlx::Error> {
    let created_at = now_millis();

    sqlx::query(
        r#"
        INSERT INTO contacts (owner_code, peer_code, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (owner_code, peer_code) DO NOTHING
        "#,
    )
    .bind(owner_code)
    .bind(peer_code)
    .bind(created_at)
    .execute(pool)
    .await?;

    let row = sqlx::query(
        r#"
        SELECT owner_code, peer_code, created_at
        FROM contacts
        WHERE owner_code = $1 AND peer_code = $2
        "#,
    )
    .bind(owner_code)
    .bind(peer_code)
    .fetch_one(pool)
    .await?;

    Ok(row_to_contact(&row))
}

/// List contacts owned by `owner_code`
pub async fn list_contacts(
    pool: &SqlitePool,
    owner_code: &str,
) -> Result<Vec<Contact>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT owner_code, peer_code, created_at
        FROM contacts
        WHERE owner_code = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(owner_code)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_contact).collect())
}

/// Remove a contact pair, returning whether a row was actually removed
pub async fn remove_contact(
    pool: &SqlitePool,
    owner_code: &str,
    peer_code: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM contacts
        WHERE owner_code = $1 AND peer_code = $2
        "#,
    )
    .bind(owner_code)
    .bind(peer_code)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        sqlx::migrate!().run(&pool).await.expect("migrations");
        pool
    }

    #[tokio::test]
    async fn test_add_and_list_contacts() {
        let pool = test_pool().await;
        add_contact(&pool, "111111", "222222").await.unwrap();
        add_contact(&pool, "111111", "333333").await.unwrap();
        add_contact(&pool, "444444", "111111").await.unwrap();

        let contacts = list_contacts(&pool, "111111").await.unwrap();
        assert_eq!(contacts.len(), 2);
        assert!(contacts.iter().all(|c| c.owner_code == "111111"));
    }

    #[tokio::test]
    async fn test_add_duplicate_keeps_original() {
        let pool = test_pool().await;
        let first = add_contact(&pool, "111111", "222222").await.unwrap();
        let second = add_contact(&pool, "111111", "222222").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(list_contacts(&pool, "111111").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_contact() {
        let pool = test_pool().await;
        add_contact(&pool, "111111", "222222").await.unwrap();

        assert!(remove_contact(&pool, "111111", "222222").await.unwrap());
        assert!(!remove_contact(&pool, "111111", "222222").await.unwrap());
        assert!(list_contacts(&pool, "111111").await.unwrap().is_empty());
    }
}
