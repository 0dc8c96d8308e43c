//! Route definitions for the `/episodes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::episode;
use crate::state::AppState;

/// Routes mounted at `/episodes`.
///
/// ```text
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/history     -> list_history
/// GET    /{id}/thumbnail   -> thumbnail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(episode::create))
        .route(
            "/{id}",
            get(episode::get_by_id)
                .put(episode::update)
                .delete(episode::delete),
        )
        .route("/{id}/history", get(episode::list_history))
        .route("/{id}/thumbnail", get(episode::thumbnail))
}
