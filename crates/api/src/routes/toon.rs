//! Route definitions for the `/toons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::toon;
use crate::state::AppState;

/// Routes mounted at `/toons`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/episodes    -> list_episodes
/// GET    /{id}/thumbnail   -> thumbnail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(toon::list).post(toon::create))
        .route(
            "/{id}",
            get(toon::get_by_id).put(toon::update).delete(toon::delete),
        )
        .route("/{id}/episodes", get(toon::list_episodes))
        .route("/{id}/thumbnail", get(toon::thumbnail))
}
