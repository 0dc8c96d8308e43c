//! Result shapes of the multi-table feed queries.

use serde::Serialize;
use sqlx::FromRow;
use webtoon_core::types::{DbId, Timestamp};

use crate::models::episode::Episode;
use crate::models::toon::Toon;

/// A toon paired with its latest episode (highest sequence).
#[derive(Debug, Clone, Serialize)]
pub struct ToonWithLatestEpisode {
    pub toon: Toon,
    pub latest_episode: Episode,
}

/// Flat join row; episode columns are prefixed to avoid clashing with the
/// toon's `title`, `url` and `thumbnail_url`.
#[derive(Debug, FromRow)]
pub(crate) struct BrowseRow {
    pub toon_id: DbId,
    pub title: String,
    pub synopsis: Option<String>,
    pub platform: String,
    pub weekday: String,
    pub url: String,
    pub thumbnail_url: String,
    pub created_at: Timestamp,
    pub episode_id: DbId,
    pub episode_title: String,
    pub episode_url: String,
    pub episode_thumbnail_url: String,
    pub episode_sequence: i32,
    pub episode_updated_at: Timestamp,
}

impl From<BrowseRow> for ToonWithLatestEpisode {
    fn from(row: BrowseRow) -> Self {
        Self {
            latest_episode: Episode {
                episode_id: row.episode_id,
                toon_id: row.toon_id,
                title: row.episode_title,
                url: row.episode_url,
                thumbnail_url: row.episode_thumbnail_url,
                sequence: row.episode_sequence,
                updated_at: row.episode_updated_at,
            },
            toon: Toon {
                toon_id: row.toon_id,
                title: row.title,
                synopsis: row.synopsis,
                platform: row.platform,
                weekday: row.weekday,
                url: row.url,
                thumbnail_url: row.thumbnail_url,
                created_at: row.created_at,
            },
        }
    }
}
