//! Composed reads: a user's stars and unseen episodes, and platform browsing.

use axum::extract::{Path, State};
use axum::Json;
use webtoon_core::types::DbId;
use webtoon_db::models::episode::Episode;
use webtoon_db::models::feed::ToonWithLatestEpisode;
use webtoon_db::models::star::Star;
use webtoon_db::models::view_history::ViewHistory;
use webtoon_db::repositories::{FeedRepo, StarRepo, ViewHistoryRepo};

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::payload::WeekdayQuery;
use crate::state::AppState;

/// GET /api/v1/users/{user_id}/stars?weekday=
pub async fn stars_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiQuery(params): ApiQuery<WeekdayQuery>,
) -> AppResult<Json<Vec<Star>>> {
    let weekday = params.parse()?;
    let stars = FeedRepo::stars_by_user(&state.pool, &user_id, weekday).await?;
    tracing::debug!(user_id = %user_id, ?weekday, count = stars.len(), "Listed stars");
    Ok(Json(stars))
}

/// GET /api/v1/users/{user_id}/toons/{toon_id}/stars
pub async fn stars_by_user_and_toon(
    State(state): State<AppState>,
    Path((user_id, toon_id)): Path<(String, DbId)>,
) -> AppResult<Json<Vec<Star>>> {
    let stars = StarRepo::list_by_user_and_toon(&state.pool, &user_id, toon_id).await?;
    Ok(Json(stars))
}

/// GET /api/v1/users/{user_id}/history
pub async fn history_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<ViewHistory>>> {
    let history = ViewHistoryRepo::list_by_user(&state.pool, &user_id).await?;
    Ok(Json(history))
}

/// GET /api/v1/users/{user_id}/unseen
pub async fn unseen_episodes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Episode>>> {
    let episodes = FeedRepo::unseen_episodes(&state.pool, &user_id).await?;
    tracing::debug!(user_id = %user_id, count = episodes.len(), "Listed unseen episodes");
    Ok(Json(episodes))
}

/// GET /api/v1/browse/{platform}?weekday=
pub async fn browse_platform(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    ApiQuery(params): ApiQuery<WeekdayQuery>,
) -> AppResult<Json<Vec<ToonWithLatestEpisode>>> {
    let weekday = params.parse()?;
    let toons = FeedRepo::browse_platform(&state.pool, &platform, weekday).await?;
    tracing::debug!(platform = %platform, ?weekday, count = toons.len(), "Browsed platform");
    Ok(Json(toons))
}
