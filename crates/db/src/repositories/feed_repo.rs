//! Multi-table read queries.
//!
//! Weekday filters compare whole comma-delimited elements of a toon's
//! weekday-set code (`$token = ANY(string_to_array(weekday, ','))`), so
//! `"Sat"` never matches a code merely containing those three letters.

use sqlx::PgPool;
use webtoon_core::weekday::Weekday;

use crate::error::DbResult;
use crate::models::episode::Episode;
use crate::models::feed::{BrowseRow, ToonWithLatestEpisode};
use crate::models::star::Star;

/// Provides the composed reads behind the user feed and platform browsing.
pub struct FeedRepo;

impl FeedRepo {
    /// List a user's live stars, optionally only those whose toon is
    /// released on `weekday`.
    pub async fn stars_by_user(
        pool: &PgPool,
        user_id: &str,
        weekday: Option<Weekday>,
    ) -> DbResult<Vec<Star>> {
        let stars = sqlx::query_as::<_, Star>(
            "SELECT s.star_id, s.user_id, s.toon_id, s.created_at, s.deleted_at
             FROM stars s
             WHERE s.user_id = $1
               AND s.deleted_at IS NULL
               AND ($2::text IS NULL OR EXISTS (
                   SELECT 1 FROM toons t
                   WHERE t.toon_id = s.toon_id
                     AND $2 = ANY(string_to_array(t.weekday, ','))
               ))
             ORDER BY s.star_id",
        )
        .bind(user_id)
        .bind(weekday.map(Weekday::token))
        .fetch_all(pool)
        .await?;
        Ok(stars)
    }

    /// Episodes of every toon the user stars that the user has no live view
    /// history for, most recently updated first.
    pub async fn unseen_episodes(pool: &PgPool, user_id: &str) -> DbResult<Vec<Episode>> {
        let episodes = sqlx::query_as::<_, Episode>(
            "SELECT e.episode_id, e.toon_id, e.title, e.url, e.thumbnail_url,
                    e.sequence, e.updated_at
             FROM episodes e
             WHERE EXISTS (
                   SELECT 1 FROM stars s
                   WHERE s.user_id = $1
                     AND s.toon_id = e.toon_id
                     AND s.deleted_at IS NULL
               )
               AND NOT EXISTS (
                   SELECT 1 FROM view_history h
                   WHERE h.user_id = $1
                     AND h.episode_id = e.episode_id
                     AND h.deleted_at IS NULL
               )
             ORDER BY e.updated_at DESC, e.episode_id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(episodes)
    }

    /// Every toon on `platform` paired with its latest episode, optionally
    /// only toons released on `weekday`.
    ///
    /// The latest episode has the highest sequence; ties go to the smallest
    /// episode id. Toons without episodes are left out.
    pub async fn browse_platform(
        pool: &PgPool,
        platform: &str,
        weekday: Option<Weekday>,
    ) -> DbResult<Vec<ToonWithLatestEpisode>> {
        let rows = sqlx::query_as::<_, BrowseRow>(
            "SELECT t.toon_id, t.title, t.synopsis, t.platform, t.weekday, t.url,
                    t.thumbnail_url, t.created_at,
                    e.episode_id,
                    e.title AS episode_title,
                    e.url AS episode_url,
                    e.thumbnail_url AS episode_thumbnail_url,
                    e.sequence AS episode_sequence,
                    e.updated_at AS episode_updated_at
             FROM toons t
             JOIN LATERAL (
                 SELECT ep.episode_id, ep.title, ep.url, ep.thumbnail_url,
                        ep.sequence, ep.updated_at
                 FROM episodes ep
                 WHERE ep.toon_id = t.toon_id
                 ORDER BY ep.sequence DESC, ep.episode_id ASC
                 LIMIT 1
             ) e ON TRUE
             WHERE t.platform = $1
               AND ($2::text IS NULL OR $2 = ANY(string_to_array(t.weekday, ',')))
             ORDER BY t.toon_id",
        )
        .bind(platform)
        .bind(weekday.map(Weekday::token))
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(ToonWithLatestEpisode::from).collect())
    }
}
