//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use webtoon_core::error::CoreError;
use webtoon_db::models::user::{CreateUser, UpdateUser, User};
use webtoon_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::payload::{CreateUserPayload, UpdateUserPayload};
use crate::response::{DeletedResponse, OptionalRow};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UserIdResponse {
    pub user_id: String,
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserPayload>,
) -> AppResult<(StatusCode, Json<UserIdResponse>)> {
    let input = CreateUser::try_from(payload)?;
    let user_id = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = %user_id, "User created");
    Ok((StatusCode::CREATED, Json(UserIdResponse { user_id })))
}

/// GET /api/v1/users/{user_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<OptionalRow<User>>> {
    let user = UserRepo::find_by_id(&state.pool, &user_id).await?;
    Ok(Json(OptionalRow(user)))
}

/// PUT /api/v1/users/{user_id}
pub async fn update(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateUserPayload>,
) -> AppResult<Json<UserIdResponse>> {
    let input = UpdateUser::try_from(payload)?;
    let user_id = UserRepo::update(&state.pool, &user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", &user_id)))?;
    tracing::info!(user_id = %user_id, "User updated");
    Ok(Json(UserIdResponse { user_id }))
}

/// DELETE /api/v1/users/{user_id}
///
/// Also soft-deletes the user's stars and view history.
pub async fn delete(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    let report = UserRepo::delete(&state.pool, &user_id).await?;
    if !report.deleted {
        return Err(AppError::Core(CoreError::not_found("User", &user_id)));
    }
    tracing::info!(user_id = %user_id, cascaded = ?report.cascaded, "User deleted");
    Ok(Json(DeletedResponse::ok()))
}
