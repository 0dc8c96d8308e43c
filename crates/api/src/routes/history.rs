//! Route definitions for the `/history` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// Routes mounted at `/history`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(history::create))
        .route(
            "/{id}",
            get(history::get_by_id)
                .put(history::update)
                .delete(history::delete),
        )
}
