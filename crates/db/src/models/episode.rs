//! Episode entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use webtoon_core::types::{DbId, Timestamp};

/// A row from the `episodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Episode {
    pub episode_id: DbId,
    pub toon_id: DbId,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub sequence: i32,
    pub updated_at: Timestamp,
}

/// DTO for creating an episode.
#[derive(Debug, Clone)]
pub struct CreateEpisode {
    pub toon_id: DbId,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    /// Assigned as the toon's next sequence when `None`.
    pub sequence: Option<i32>,
    /// Defaults to the current time when `None`.
    pub updated_at: Option<Timestamp>,
}

/// DTO for replacing an episode's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateEpisode {
    pub toon_id: DbId,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub sequence: i32,
    /// Defaults to the current time when `None`.
    pub updated_at: Option<Timestamp>,
}
