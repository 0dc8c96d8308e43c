//! Handlers for the `/history` resource (per-user episode views).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use webtoon_core::error::CoreError;
use webtoon_core::types::DbId;
use webtoon_db::models::view_history::{ViewHistory, ViewHistoryInput};
use webtoon_db::repositories::ViewHistoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::payload::ViewHistoryPayload;
use crate::response::{DeletedResponse, OptionalRow};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryIdResponse {
    pub history_id: DbId,
}

/// POST /api/v1/history
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ViewHistoryPayload>,
) -> AppResult<(StatusCode, Json<HistoryIdResponse>)> {
    let input = ViewHistoryInput::try_from(payload)?;
    let history_id = ViewHistoryRepo::create(&state.pool, &input).await?;
    tracing::info!(
        history_id,
        user_id = %input.user_id,
        episode_id = input.episode_id,
        "View history created"
    );
    Ok((StatusCode::CREATED, Json(HistoryIdResponse { history_id })))
}

/// GET /api/v1/history/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OptionalRow<ViewHistory>>> {
    let history = ViewHistoryRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(OptionalRow(history)))
}

/// PUT /api/v1/history/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(payload): ApiJson<ViewHistoryPayload>,
) -> AppResult<Json<HistoryIdResponse>> {
    let input = ViewHistoryInput::try_from(payload)?;
    let history_id = ViewHistoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("ViewHistory", id)))?;
    tracing::info!(history_id, "View history updated");
    Ok(Json(HistoryIdResponse { history_id }))
}

/// DELETE /api/v1/history/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let report = ViewHistoryRepo::delete(&state.pool, id).await?;
    if !report.deleted {
        return Err(AppError::Core(CoreError::not_found("ViewHistory", id)));
    }
    tracing::info!(history_id = id, "View history deleted");
    Ok(Json(DeletedResponse::ok()))
}
