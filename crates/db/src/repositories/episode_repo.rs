//! Repository for the `episodes` table.

use sqlx::PgPool;
use webtoon_core::delete_policy::EntityKind;
use webtoon_core::types::DbId;

use crate::cascade::{self, DeleteReport};
use crate::error::{single_live, DbResult};
use crate::models::episode::{CreateEpisode, Episode, UpdateEpisode};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "episode_id, toon_id, title, url, thumbnail_url, sequence, updated_at";

/// Provides CRUD operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode, returning its generated id.
    ///
    /// When `sequence` is `None` the episode gets the toon's next sequence
    /// number (1 for a toon without episodes). Concurrent creates on the same
    /// toon are serialized by a transaction-scoped advisory lock on `toon_id`,
    /// held until the insert commits.
    pub async fn create(pool: &PgPool, input: &CreateEpisode) -> DbResult<DbId> {
        let mut tx = pool.begin().await?;

        let sequence = match input.sequence {
            Some(sequence) => sequence,
            None => {
                sqlx::query("SELECT pg_advisory_xact_lock($1)")
                    .bind(input.toon_id)
                    .execute(&mut *tx)
                    .await?;

                let next: (i32,) = sqlx::query_as(
                    "SELECT COALESCE(MAX(sequence), 0) + 1 FROM episodes WHERE toon_id = $1",
                )
                .bind(input.toon_id)
                .fetch_one(&mut *tx)
                .await?;
                next.0
            }
        };

        let episode_id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO episodes (toon_id, title, url, thumbnail_url, sequence, updated_at)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
             RETURNING episode_id",
        )
        .bind(input.toon_id)
        .bind(&input.title)
        .bind(&input.url)
        .bind(&input.thumbnail_url)
        .bind(sequence)
        .bind(input.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(episode_id)
    }

    /// Find an episode by id.
    pub async fn find_by_id(pool: &PgPool, episode_id: DbId) -> DbResult<Option<Episode>> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE episode_id = $1");
        let rows = sqlx::query_as::<_, Episode>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await?;
        single_live(rows, "Episode", episode_id)
    }

    /// List all episodes of a toon in sequence order.
    pub async fn list_by_toon(pool: &PgPool, toon_id: DbId) -> DbResult<Vec<Episode>> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes WHERE toon_id = $1 ORDER BY sequence, episode_id"
        );
        let episodes = sqlx::query_as::<_, Episode>(&query)
            .bind(toon_id)
            .fetch_all(pool)
            .await?;
        Ok(episodes)
    }

    /// Replace every mutable field of an episode.
    ///
    /// Returns `None` if no episode with the given id exists.
    pub async fn update(
        pool: &PgPool,
        episode_id: DbId,
        input: &UpdateEpisode,
    ) -> DbResult<Option<DbId>> {
        let updated = sqlx::query_scalar::<_, DbId>(
            "UPDATE episodes SET
                toon_id = $2,
                title = $3,
                url = $4,
                thumbnail_url = $5,
                sequence = $6,
                updated_at = COALESCE($7, NOW())
             WHERE episode_id = $1
             RETURNING episode_id",
        )
        .bind(episode_id)
        .bind(input.toon_id)
        .bind(&input.title)
        .bind(&input.url)
        .bind(&input.thumbnail_url)
        .bind(input.sequence)
        .bind(input.updated_at)
        .fetch_optional(pool)
        .await?;
        Ok(updated)
    }

    /// Hard-delete an episode and tombstone its view history.
    pub async fn delete(pool: &PgPool, episode_id: DbId) -> DbResult<DeleteReport> {
        cascade::delete(pool, EntityKind::Episode, episode_id).await
    }

    /// Stored thumbnail URL of an episode, for the thumbnail proxy.
    pub async fn find_thumbnail_url(pool: &PgPool, episode_id: DbId) -> DbResult<Option<String>> {
        let rows = sqlx::query_scalar::<_, String>(
            "SELECT thumbnail_url FROM episodes WHERE episode_id = $1",
        )
        .bind(episode_id)
        .fetch_all(pool)
        .await?;
        single_live(rows, "Episode", episode_id)
    }
}
