//! Database and server fixtures

use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations applied
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

/// Test server wrapping the full application on a fresh database
pub async fn create_test_server() -> TestServer {
    let pool = test_pool().await;
    let app = codeline::backend::server::create_app(pool);
    TestServer::new(app).expect("failed to start test server")
}
