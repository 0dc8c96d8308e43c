//! Handlers for the `/episodes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use webtoon_core::error::CoreError;
use webtoon_core::types::DbId;
use webtoon_db::models::episode::{CreateEpisode, Episode, UpdateEpisode};
use webtoon_db::models::view_history::ViewHistory;
use webtoon_db::repositories::{EpisodeRepo, ViewHistoryRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::payload::EpisodePayload;
use crate::response::{DeletedResponse, OptionalRow};
use crate::state::AppState;
use crate::thumbnail::ThumbnailResponse;

#[derive(Debug, Serialize)]
pub struct EpisodeIdResponse {
    pub episode_id: DbId,
}

/// POST /api/v1/episodes
///
/// `sequence` defaults to the toon's next sequence number.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EpisodePayload>,
) -> AppResult<(StatusCode, Json<EpisodeIdResponse>)> {
    let input = CreateEpisode::try_from(payload)?;
    let episode_id = EpisodeRepo::create(&state.pool, &input).await?;
    tracing::info!(episode_id, toon_id = input.toon_id, "Episode created");
    Ok((StatusCode::CREATED, Json(EpisodeIdResponse { episode_id })))
}

/// GET /api/v1/episodes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OptionalRow<Episode>>> {
    let episode = EpisodeRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(OptionalRow(episode)))
}

/// PUT /api/v1/episodes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(payload): ApiJson<EpisodePayload>,
) -> AppResult<Json<EpisodeIdResponse>> {
    let input = UpdateEpisode::try_from(payload)?;
    let episode_id = EpisodeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Episode", id)))?;
    tracing::info!(episode_id, "Episode updated");
    Ok(Json(EpisodeIdResponse { episode_id }))
}

/// DELETE /api/v1/episodes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let report = EpisodeRepo::delete(&state.pool, id).await?;
    if !report.deleted {
        return Err(AppError::Core(CoreError::not_found("Episode", id)));
    }
    tracing::info!(episode_id = id, cascaded = ?report.cascaded, "Episode deleted");
    Ok(Json(DeletedResponse::ok()))
}

/// GET /api/v1/episodes/{id}/history
pub async fn list_history(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ViewHistory>>> {
    let history = ViewHistoryRepo::list_by_episode(&state.pool, id).await?;
    Ok(Json(history))
}

/// GET /api/v1/episodes/{id}/thumbnail
pub async fn thumbnail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ThumbnailResponse>> {
    let url = EpisodeRepo::find_thumbnail_url(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Episode", id)))?;
    let body = state.thumbnails.fetch_encoded(url).await?;
    Ok(Json(body))
}
