//! Toon entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use webtoon_core::types::{DbId, Timestamp};

/// A row from the `toons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Toon {
    pub toon_id: DbId,
    pub title: String,
    pub synopsis: Option<String>,
    pub platform: String,
    /// Weekday-set code, e.g. `"Tue,Thr"`.
    pub weekday: String,
    pub url: String,
    pub thumbnail_url: String,
    pub created_at: Timestamp,
}

/// Full mutable field set of a toon, used by both create and update.
#[derive(Debug, Clone)]
pub struct ToonInput {
    pub title: String,
    pub synopsis: Option<String>,
    pub platform: String,
    pub weekday: String,
    pub url: String,
    pub thumbnail_url: String,
}
