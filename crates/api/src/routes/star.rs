//! Route definitions for the `/stars` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::star;
use crate::state::AppState;

/// Routes mounted at `/stars`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(star::create))
        .route(
            "/{id}",
            get(star::get_by_id).put(star::update).delete(star::delete),
        )
}
