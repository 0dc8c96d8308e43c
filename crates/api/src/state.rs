use crate::thumbnail::ThumbnailFetcher;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool and the HTTP client are both handles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: webtoon_db::DbPool,
    /// HTTP client used by the thumbnail proxy.
    pub thumbnails: ThumbnailFetcher,
}
