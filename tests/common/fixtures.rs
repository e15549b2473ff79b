/// Test fixtures shared by the integration tests.
/// Every test gets its own in-memory database with the schema applied.
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Create an isolated in-memory database pool.
/// A single connection that never idles out, so the database lives as long
/// as the pool.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    social_api::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
