//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{feed, user};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /                                  -> create
/// GET    /{user_id}                         -> get_by_id
/// PUT    /{user_id}                         -> update
/// DELETE /{user_id}                         -> delete
/// GET    /{user_id}/stars                   -> stars_by_user
/// GET    /{user_id}/toons/{toon_id}/stars   -> stars_by_user_and_toon
/// GET    /{user_id}/history                 -> history_by_user
/// GET    /{user_id}/unseen                  -> unseen_episodes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(user::create))
        .route(
            "/{user_id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
        .route("/{user_id}/stars", get(feed::stars_by_user))
        .route(
            "/{user_id}/toons/{toon_id}/stars",
            get(feed::stars_by_user_and_toon),
        )
        .route("/{user_id}/history", get(feed::history_by_user))
        .route("/{user_id}/unseen", get(feed::unseen_episodes))
}
