//! Repository for the `view_history` table.
//!
//! View history rows are soft-deleted like stars: reads and updates only see
//! rows whose `deleted_at` is NULL.

use sqlx::PgPool;
use webtoon_core::delete_policy::EntityKind;
use webtoon_core::types::DbId;

use crate::cascade::{self, DeleteReport};
use crate::error::{single_live, single_row, DbResult};
use crate::models::view_history::{ViewHistory, ViewHistoryInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "history_id, user_id, episode_id, viewed_at, deleted_at";

/// Provides CRUD operations for view history.
pub struct ViewHistoryRepo;

impl ViewHistoryRepo {
    /// Record that a user viewed an episode, returning the generated id.
    pub async fn create(pool: &PgPool, input: &ViewHistoryInput) -> DbResult<DbId> {
        let history_id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO view_history (user_id, episode_id) VALUES ($1, $2) RETURNING history_id",
        )
        .bind(&input.user_id)
        .bind(input.episode_id)
        .fetch_one(pool)
        .await?;
        Ok(history_id)
    }

    /// Find a live view history row by id.
    pub async fn find_by_id(pool: &PgPool, history_id: DbId) -> DbResult<Option<ViewHistory>> {
        let query = format!(
            "SELECT {COLUMNS} FROM view_history WHERE history_id = $1 AND deleted_at IS NULL"
        );
        let rows = sqlx::query_as::<_, ViewHistory>(&query)
            .bind(history_id)
            .fetch_all(pool)
            .await?;
        single_live(rows, "ViewHistory", history_id)
    }

    /// Find a view history row by id, including tombstoned rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        history_id: DbId,
    ) -> DbResult<Option<ViewHistory>> {
        let query = format!("SELECT {COLUMNS} FROM view_history WHERE history_id = $1");
        let rows = sqlx::query_as::<_, ViewHistory>(&query)
            .bind(history_id)
            .fetch_all(pool)
            .await?;
        single_row(rows, "ViewHistory", history_id)
    }

    /// List a user's live view history, most recent first.
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> DbResult<Vec<ViewHistory>> {
        let query = format!(
            "SELECT {COLUMNS} FROM view_history
             WHERE user_id = $1 AND deleted_at IS NULL
             ORDER BY viewed_at DESC, history_id DESC"
        );
        let rows = sqlx::query_as::<_, ViewHistory>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// List the live view history of one episode, most recent first.
    pub async fn list_by_episode(pool: &PgPool, episode_id: DbId) -> DbResult<Vec<ViewHistory>> {
        let query = format!(
            "SELECT {COLUMNS} FROM view_history
             WHERE episode_id = $1 AND deleted_at IS NULL
             ORDER BY viewed_at DESC, history_id DESC"
        );
        let rows = sqlx::query_as::<_, ViewHistory>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Replace the user and episode of a live view history row.
    ///
    /// Returns `None` if no live row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        history_id: DbId,
        input: &ViewHistoryInput,
    ) -> DbResult<Option<DbId>> {
        let updated = sqlx::query_scalar::<_, DbId>(
            "UPDATE view_history SET user_id = $2, episode_id = $3
             WHERE history_id = $1 AND deleted_at IS NULL
             RETURNING history_id",
        )
        .bind(history_id)
        .bind(&input.user_id)
        .bind(input.episode_id)
        .fetch_optional(pool)
        .await?;
        Ok(updated)
    }

    /// Soft-delete a view history row.
    pub async fn delete(pool: &PgPool, history_id: DbId) -> DbResult<DeleteReport> {
        cascade::delete(pool, EntityKind::ViewHistory, history_id).await
    }
}
