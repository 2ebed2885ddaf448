//! Postgres persistence for favorites.
//!
//! Holds the connection pool helpers, the row models, the repositories over
//! the asset catalog and `favorites` tables, and [`store::PgFavoriteStore`],
//! the relational implementation of the favorites store.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::DbConfig;
pub use store::PgFavoriteStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool, connecting eagerly so a bad DSN fails here.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
