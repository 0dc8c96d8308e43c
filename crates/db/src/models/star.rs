//! Star (followed toon) entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use webtoon_core::types::{DbId, Timestamp};

/// A row from the `stars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Star {
    pub star_id: DbId,
    pub user_id: String,
    pub toon_id: DbId,
    pub created_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Full mutable field set of a star, used by both create and update.
#[derive(Debug, Clone)]
pub struct StarInput {
    pub user_id: String,
    pub toon_id: DbId,
}
