//! Handlers for the `/toons` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use webtoon_core::error::CoreError;
use webtoon_core::types::DbId;
use webtoon_db::models::episode::Episode;
use webtoon_db::models::toon::{Toon, ToonInput};
use webtoon_db::repositories::{EpisodeRepo, ToonRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::payload::{PlatformQuery, ToonPayload};
use crate::response::{DeletedResponse, OptionalRow};
use crate::state::AppState;
use crate::thumbnail::ThumbnailResponse;

#[derive(Debug, Serialize)]
pub struct ToonIdResponse {
    pub toon_id: DbId,
}

/// POST /api/v1/toons
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ToonPayload>,
) -> AppResult<(StatusCode, Json<ToonIdResponse>)> {
    let input = ToonInput::try_from(payload)?;
    let toon_id = ToonRepo::create(&state.pool, &input).await?;
    tracing::info!(toon_id, platform = %input.platform, "Toon created");
    Ok((StatusCode::CREATED, Json(ToonIdResponse { toon_id })))
}

/// GET /api/v1/toons
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PlatformQuery>,
) -> AppResult<Json<Vec<Toon>>> {
    let toons = ToonRepo::list(&state.pool, params.platform.as_deref()).await?;
    tracing::debug!(count = toons.len(), "Listed toons");
    Ok(Json(toons))
}

/// GET /api/v1/toons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OptionalRow<Toon>>> {
    let toon = ToonRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(OptionalRow(toon)))
}

/// PUT /api/v1/toons/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(payload): ApiJson<ToonPayload>,
) -> AppResult<Json<ToonIdResponse>> {
    let input = ToonInput::try_from(payload)?;
    let toon_id = ToonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Toon", id)))?;
    tracing::info!(toon_id, "Toon updated");
    Ok(Json(ToonIdResponse { toon_id }))
}

/// DELETE /api/v1/toons/{id}
///
/// Removes the toon's episodes and soft-deletes stars on it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let report = ToonRepo::delete(&state.pool, id).await?;
    if !report.deleted {
        return Err(AppError::Core(CoreError::not_found("Toon", id)));
    }
    tracing::info!(toon_id = id, cascaded = ?report.cascaded, "Toon deleted");
    Ok(Json(DeletedResponse::ok()))
}

/// GET /api/v1/toons/{id}/episodes
pub async fn list_episodes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Episode>>> {
    let episodes = EpisodeRepo::list_by_toon(&state.pool, id).await?;
    Ok(Json(episodes))
}

/// GET /api/v1/toons/{id}/thumbnail
pub async fn thumbnail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ThumbnailResponse>> {
    let url = ToonRepo::find_thumbnail_url(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Toon", id)))?;
    let body = state.thumbnails.fetch_encoded(url).await?;
    Ok(Json(body))
}
