//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Point lookups go through
//! [`single_live`](crate::error) so duplicate live rows surface as
//! [`DbError::Integrity`](crate::DbError) instead of an arbitrary pick.

pub mod episode_repo;
pub mod feed_repo;
pub mod star_repo;
pub mod toon_repo;
pub mod user_repo;
pub mod view_history_repo;

pub use episode_repo::EpisodeRepo;
pub use feed_repo::FeedRepo;
pub use star_repo::StarRepo;
pub use toon_repo::ToonRepo;
pub use user_repo::UserRepo;
pub use view_history_repo::ViewHistoryRepo;
