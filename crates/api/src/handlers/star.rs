//! Handlers for the `/stars` resource.
//!
//! Stars are soft-deleted; a deleted star reads as `{}` and cannot be
//! updated or deleted again.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use webtoon_core::error::CoreError;
use webtoon_core::types::DbId;
use webtoon_db::models::star::{Star, StarInput};
use webtoon_db::repositories::StarRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::payload::StarPayload;
use crate::response::{DeletedResponse, OptionalRow};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StarIdResponse {
    pub star_id: DbId,
}

/// POST /api/v1/stars
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StarPayload>,
) -> AppResult<(StatusCode, Json<StarIdResponse>)> {
    let input = StarInput::try_from(payload)?;
    let star_id = StarRepo::create(&state.pool, &input).await?;
    tracing::info!(star_id, user_id = %input.user_id, toon_id = input.toon_id, "Star created");
    Ok((StatusCode::CREATED, Json(StarIdResponse { star_id })))
}

/// GET /api/v1/stars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OptionalRow<Star>>> {
    let star = StarRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(OptionalRow(star)))
}

/// PUT /api/v1/stars/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(payload): ApiJson<StarPayload>,
) -> AppResult<Json<StarIdResponse>> {
    let input = StarInput::try_from(payload)?;
    let star_id = StarRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Star", id)))?;
    tracing::info!(star_id, "Star updated");
    Ok(Json(StarIdResponse { star_id }))
}

/// DELETE /api/v1/stars/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let report = StarRepo::delete(&state.pool, id).await?;
    if !report.deleted {
        return Err(AppError::Core(CoreError::not_found("Star", id)));
    }
    tracing::info!(star_id = id, "Star deleted");
    Ok(Json(DeletedResponse::ok()))
}
