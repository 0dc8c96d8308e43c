//! Repository for the `toons` table.

use sqlx::PgPool;
use webtoon_core::delete_policy::EntityKind;
use webtoon_core::types::DbId;

use crate::cascade::{self, DeleteReport};
use crate::error::{single_live, DbResult};
use crate::models::toon::{Toon, ToonInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "toon_id, title, synopsis, platform, weekday, url, thumbnail_url, created_at";

/// Provides CRUD operations for toons.
pub struct ToonRepo;

impl ToonRepo {
    /// Insert a new toon, returning its generated id.
    pub async fn create(pool: &PgPool, input: &ToonInput) -> DbResult<DbId> {
        let toon_id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO toons (title, synopsis, platform, weekday, url, thumbnail_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING toon_id",
        )
        .bind(&input.title)
        .bind(&input.synopsis)
        .bind(&input.platform)
        .bind(&input.weekday)
        .bind(&input.url)
        .bind(&input.thumbnail_url)
        .fetch_one(pool)
        .await?;
        Ok(toon_id)
    }

    /// Find a toon by id.
    pub async fn find_by_id(pool: &PgPool, toon_id: DbId) -> DbResult<Option<Toon>> {
        let query = format!("SELECT {COLUMNS} FROM toons WHERE toon_id = $1");
        let rows = sqlx::query_as::<_, Toon>(&query)
            .bind(toon_id)
            .fetch_all(pool)
            .await?;
        single_live(rows, "Toon", toon_id)
    }

    /// List toons ordered by id, optionally restricted to one platform.
    pub async fn list(pool: &PgPool, platform: Option<&str>) -> DbResult<Vec<Toon>> {
        let query = format!(
            "SELECT {COLUMNS} FROM toons
             WHERE ($1::text IS NULL OR platform = $1)
             ORDER BY toon_id"
        );
        let toons = sqlx::query_as::<_, Toon>(&query)
            .bind(platform)
            .fetch_all(pool)
            .await?;
        Ok(toons)
    }

    /// Replace every mutable field of a toon.
    ///
    /// Returns `None` if no toon with the given id exists.
    pub async fn update(pool: &PgPool, toon_id: DbId, input: &ToonInput) -> DbResult<Option<DbId>> {
        let updated = sqlx::query_scalar::<_, DbId>(
            "UPDATE toons SET
                title = $2,
                synopsis = $3,
                platform = $4,
                weekday = $5,
                url = $6,
                thumbnail_url = $7
             WHERE toon_id = $1
             RETURNING toon_id",
        )
        .bind(toon_id)
        .bind(&input.title)
        .bind(&input.synopsis)
        .bind(&input.platform)
        .bind(&input.weekday)
        .bind(&input.url)
        .bind(&input.thumbnail_url)
        .fetch_optional(pool)
        .await?;
        Ok(updated)
    }

    /// Hard-delete a toon together with its episodes (and their view
    /// history), and tombstone the stars that follow it.
    pub async fn delete(pool: &PgPool, toon_id: DbId) -> DbResult<DeleteReport> {
        cascade::delete(pool, EntityKind::Toon, toon_id).await
    }

    /// Stored thumbnail URL of a toon, for the thumbnail proxy.
    pub async fn find_thumbnail_url(pool: &PgPool, toon_id: DbId) -> DbResult<Option<String>> {
        let rows = sqlx::query_scalar::<_, String>(
            "SELECT thumbnail_url FROM toons WHERE toon_id = $1",
        )
        .bind(toon_id)
        .fetch_all(pool)
        .await?;
        single_live(rows, "Toon", toon_id)
    }
}
