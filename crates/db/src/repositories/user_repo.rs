//! Repository for the `users` table.

use sqlx::PgPool;
use webtoon_core::delete_policy::EntityKind;

use crate::cascade::{self, DeleteReport};
use crate::error::{single_live, DbResult};
use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, pw, name, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the caller-supplied id.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> DbResult<String> {
        let user_id = sqlx::query_scalar::<_, String>(
            "INSERT INTO users (user_id, pw, name) VALUES ($1, $2, $3) RETURNING user_id",
        )
        .bind(&input.user_id)
        .bind(&input.pw)
        .bind(&input.name)
        .fetch_one(pool)
        .await?;
        Ok(user_id)
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, user_id: &str) -> DbResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        let rows = sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        single_live(rows, "User", user_id)
    }

    /// Replace a user's password digest and name.
    ///
    /// Returns `None` if no user with the given id exists.
    pub async fn update(
        pool: &PgPool,
        user_id: &str,
        input: &UpdateUser,
    ) -> DbResult<Option<String>> {
        let updated = sqlx::query_scalar::<_, String>(
            "UPDATE users SET pw = $2, name = $3 WHERE user_id = $1 RETURNING user_id",
        )
        .bind(user_id)
        .bind(&input.pw)
        .bind(&input.name)
        .fetch_optional(pool)
        .await?;
        Ok(updated)
    }

    /// Hard-delete a user and tombstone all of their stars and view history.
    pub async fn delete(pool: &PgPool, user_id: &str) -> DbResult<DeleteReport> {
        cascade::delete(pool, EntityKind::User, user_id).await
    }
}
