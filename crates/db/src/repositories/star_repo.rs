//! Repository for the `stars` table.
//!
//! Stars are soft-deleted: every read and update filters on
//! `deleted_at IS NULL`, and a tombstoned star is never revived.

use sqlx::PgPool;
use webtoon_core::delete_policy::EntityKind;
use webtoon_core::types::DbId;

use crate::cascade::{self, DeleteReport};
use crate::error::{single_live, single_row, DbResult};
use crate::models::star::{Star, StarInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "star_id, user_id, toon_id, created_at, deleted_at";

/// Provides CRUD operations for stars.
pub struct StarRepo;

impl StarRepo {
    /// Insert a new star, returning its generated id.
    pub async fn create(pool: &PgPool, input: &StarInput) -> DbResult<DbId> {
        let star_id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO stars (user_id, toon_id) VALUES ($1, $2) RETURNING star_id",
        )
        .bind(&input.user_id)
        .bind(input.toon_id)
        .fetch_one(pool)
        .await?;
        Ok(star_id)
    }

    /// Find a live star by id.
    pub async fn find_by_id(pool: &PgPool, star_id: DbId) -> DbResult<Option<Star>> {
        let query =
            format!("SELECT {COLUMNS} FROM stars WHERE star_id = $1 AND deleted_at IS NULL");
        let rows = sqlx::query_as::<_, Star>(&query)
            .bind(star_id)
            .fetch_all(pool)
            .await?;
        single_live(rows, "Star", star_id)
    }

    /// Find a star by id, including tombstoned rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        star_id: DbId,
    ) -> DbResult<Option<Star>> {
        let query = format!("SELECT {COLUMNS} FROM stars WHERE star_id = $1");
        let rows = sqlx::query_as::<_, Star>(&query)
            .bind(star_id)
            .fetch_all(pool)
            .await?;
        single_row(rows, "Star", star_id)
    }

    /// List a user's live stars on one toon.
    pub async fn list_by_user_and_toon(
        pool: &PgPool,
        user_id: &str,
        toon_id: DbId,
    ) -> DbResult<Vec<Star>> {
        let query = format!(
            "SELECT {COLUMNS} FROM stars
             WHERE user_id = $1 AND toon_id = $2 AND deleted_at IS NULL
             ORDER BY star_id"
        );
        let stars = sqlx::query_as::<_, Star>(&query)
            .bind(user_id)
            .bind(toon_id)
            .fetch_all(pool)
            .await?;
        Ok(stars)
    }

    /// Replace the user and toon of a live star.
    ///
    /// Returns `None` if no live star with the given id exists.
    pub async fn update(pool: &PgPool, star_id: DbId, input: &StarInput) -> DbResult<Option<DbId>> {
        let updated = sqlx::query_scalar::<_, DbId>(
            "UPDATE stars SET user_id = $2, toon_id = $3
             WHERE star_id = $1 AND deleted_at IS NULL
             RETURNING star_id",
        )
        .bind(star_id)
        .bind(&input.user_id)
        .bind(input.toon_id)
        .fetch_optional(pool)
        .await?;
        Ok(updated)
    }

    /// Soft-delete a star.
    pub async fn delete(pool: &PgPool, star_id: DbId) -> DbResult<DeleteReport> {
        cascade::delete(pool, EntityKind::Star, star_id).await
    }
}
