//! Persistence layer for the webtoon collection service.
//!
//! Models mirror the five tables (`users`, `toons`, `episodes`, `stars`,
//! `view_history`); repositories are zero-sized structs whose async methods
//! take `&PgPool`. Deletes go through [`cascade`] so that a row and its
//! dependents are removed in one transaction.

use sqlx::postgres::PgPoolOptions;

pub mod cascade;
pub mod error;
pub mod models;
pub mod repositories;

pub use error::{DbError, DbResult};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the bootstrap schema in `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
