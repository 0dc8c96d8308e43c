//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use webtoon_core::types::Timestamp;

/// A row from the `users` table.
///
/// `pw` holds the SHA-512 hex digest of the password, never the plaintext.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub user_id: String,
    pub pw: String,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a user. The id is chosen by the caller.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub user_id: String,
    /// Password digest.
    pub pw: String,
    pub name: String,
}

/// DTO for replacing a user's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    /// Password digest.
    pub pw: String,
    pub name: String,
}
