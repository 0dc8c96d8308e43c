use axum::routing::get;
use axum::Router;

use crate::handlers::feed;
use crate::state::AppState;

/// Routes mounted at `/browse`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{platform}", get(feed::browse_platform))
}
