/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration,
 * focusing on the SQLite database connection.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - store location, defaulting to a local SQLite file
 * - `SERVER_PORT` - listen port, defaulting to 5000
 *
 * The ledger is the core of this server, so a store that cannot be opened
 * fails startup instead of silently disabling features.
 */

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const DEFAULT_DATABASE_URL: &str = "sqlite://codeline.db?mode=rwc";

/// Open the database pool and run migrations
///
/// Reads `DATABASE_URL`, defaulting to a local SQLite file next to the
/// binary. Migration failures are fatal: a half-migrated ledger would
/// corrupt the wire contract.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("connecting to database at {}", database_url);

    let pool = SqlitePoolOptions::new().connect(&database_url).await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("migrations failed: {:?}", e);
        sqlx::Error::Migrate(Box::new(e))
    })?;

    Ok(pool)
}

/// Port to listen on (`SERVER_PORT`, default 5000)
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000)
}
