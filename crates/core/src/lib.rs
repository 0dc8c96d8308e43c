//! Domain logic for the webtoon collection service.
//!
//! Everything here is pure: no database, no HTTP. The `db` crate applies the
//! delete policy table, the `api` crate applies field and weekday validation.

pub mod delete_policy;
pub mod error;
pub mod fields;
pub mod hashing;
pub mod types;
pub mod weekday;
