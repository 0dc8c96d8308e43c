//! View history entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use webtoon_core::types::{DbId, Timestamp};

/// A row from the `view_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ViewHistory {
    pub history_id: DbId,
    pub user_id: String,
    pub episode_id: DbId,
    pub viewed_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Full mutable field set of a view history row, used by both create and update.
#[derive(Debug, Clone)]
pub struct ViewHistoryInput {
    pub user_id: String,
    pub episode_id: DbId,
}
