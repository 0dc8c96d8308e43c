//! Errors raised by the persistence layer.

use webtoon_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The storage engine failed (connection loss, constraint violation, ...).
    #[error(transparent)]
    Store(#[from] sqlx::Error),

    /// A point lookup matched more than one row.
    #[error("Integrity violation: {count} {entity} rows share id {id}")]
    Integrity {
        entity: &'static str,
        id: String,
        count: usize,
    },
}

pub type DbResult<T> = Result<T, DbError>;

impl From<DbError> for CoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Integrity { entity, id, count } => CoreError::Integrity { entity, id, count },
            DbError::Store(e) => CoreError::Internal(e.to_string()),
        }
    }
}

/// Collapse the result of a live-row point lookup to at most one row.
///
/// Zero rows is `None`; more than one is a [`DbError::Integrity`], never a
/// silent pick of the first row.
pub(crate) fn single_live<T>(
    rows: Vec<T>,
    entity: &'static str,
    id: impl std::fmt::Display,
) -> DbResult<Option<T>> {
    collapse(rows, entity, id, "live")
}

/// Like [`single_live`], for lookups that also see tombstoned rows.
pub(crate) fn single_row<T>(
    rows: Vec<T>,
    entity: &'static str,
    id: impl std::fmt::Display,
) -> DbResult<Option<T>> {
    collapse(rows, entity, id, "including deleted")
}

fn collapse<T>(
    rows: Vec<T>,
    entity: &'static str,
    id: impl std::fmt::Display,
    scope: &'static str,
) -> DbResult<Option<T>> {
    if rows.len() > 1 {
        let id = id.to_string();
        tracing::error!(entity, %id, count = rows.len(), scope, "Duplicate rows for point lookup");
        return Err(DbError::Integrity {
            entity,
            id,
            count: rows.len(),
        });
    }
    Ok(rows.into_iter().next())
}
