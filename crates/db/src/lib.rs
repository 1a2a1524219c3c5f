//! Database layer for the world-city service.
//!
//! Owns pool construction, the `city` row model and its request DTOs, and
//! the repository that issues the parameterized statements.

pub mod config;
pub mod models;
pub mod repositories;

use sqlx::mysql::MySqlPoolOptions;

pub use config::DbConfig;

pub type DbPool = sqlx::MySqlPool;

/// Create a connection pool from explicit configuration.
///
/// The pool is lazy: no connection is opened until the first query, so the
/// server can start while the database is still unreachable.
pub fn create_pool(config: &DbConfig) -> DbPool {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(config.connect_options())
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
