//! Row structs and input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Input DTOs carrying the full mutable field set (updates replace every
//!   field; there is no partial patch)

pub mod episode;
pub mod feed;
pub mod star;
pub mod toon;
pub mod user;
pub mod view_history;
