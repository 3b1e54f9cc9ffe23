//! Database layer: connection pool, embedded migrations, row models, and
//! repositories.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. All SQL is parameterized.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Convenience alias used by the API crate's shared state.
pub type DbPool = PgPool;

/// Create a PostgreSQL connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip.
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations embedded from `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
