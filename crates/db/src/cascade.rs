//! Transactional delete executor.
//!
//! Applies [`EntityKind::delete_policy`] to a row, then to every dependent
//! reached through the cascade lists. All statements share one transaction:
//! either the primary row and all of its dependents are deleted or nothing is.

use sqlx::{PgConnection, PgPool, Row};
use webtoon_core::delete_policy::{DeleteKind, EntityKind};
use webtoon_core::types::DbId;

use crate::error::DbResult;

/// Primary keys of the rows touched by one delete step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keys {
    Text(Vec<String>),
    Int(Vec<DbId>),
}

impl Keys {
    pub fn len(&self) -> usize {
        match self {
            Keys::Text(v) => v.len(),
            Keys::Int(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<DbId> for Keys {
    fn from(id: DbId) -> Self {
        Keys::Int(vec![id])
    }
}

impl From<&str> for Keys {
    fn from(id: &str) -> Self {
        Keys::Text(vec![id.to_string()])
    }
}

/// What a delete did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    /// Whether the primary row existed (and was live, for soft-deleted kinds).
    pub deleted: bool,
    /// Rows removed or tombstoned per cascade step, in execution order.
    pub cascaded: Vec<(EntityKind, usize)>,
}

impl DeleteReport {
    /// Total rows touched by cascades of the given kind.
    pub fn cascaded_count(&self, kind: EntityKind) -> usize {
        self.cascaded
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, n)| n)
            .sum()
    }
}

/// Table name and primary key column of each entity.
pub(crate) const fn table_and_key(kind: EntityKind) -> (&'static str, &'static str) {
    match kind {
        EntityKind::User => ("users", "user_id"),
        EntityKind::Toon => ("toons", "toon_id"),
        EntityKind::Episode => ("episodes", "episode_id"),
        EntityKind::Star => ("stars", "star_id"),
        EntityKind::ViewHistory => ("view_history", "history_id"),
    }
}

/// Delete one row by primary key and cascade to its dependents.
///
/// Returns a report with `deleted == false` (and rolls back) when no live row
/// matched; cascades are only applied when the primary row was deleted.
pub async fn delete(pool: &PgPool, kind: EntityKind, id: impl Into<Keys>) -> DbResult<DeleteReport> {
    let mut tx = pool.begin().await?;

    let (_, primary_key) = table_and_key(kind);
    let primary = apply(&mut tx, kind, primary_key, &id.into()).await?;
    if primary.is_empty() {
        tx.rollback().await?;
        return Ok(DeleteReport::default());
    }

    let mut report = DeleteReport {
        deleted: true,
        cascaded: Vec::new(),
    };
    let mut pending = vec![(kind, primary)];
    while let Some((source, keys)) = pending.pop() {
        for cascade in source.delete_policy().cascades {
            let touched = apply(&mut tx, cascade.target, cascade.foreign_key, &keys).await?;
            tracing::debug!(
                source = source.label(),
                target = cascade.target.label(),
                count = touched.len(),
                "Cascade applied"
            );
            report.cascaded.push((cascade.target, touched.len()));
            if !touched.is_empty() {
                pending.push((cascade.target, touched));
            }
        }
    }

    tx.commit().await?;
    Ok(report)
}

/// Run the delete statement of `target` for every row whose `column` is in
/// `keys`, returning the primary keys of the rows it touched.
async fn apply(
    conn: &mut PgConnection,
    target: EntityKind,
    column: &str,
    keys: &Keys,
) -> DbResult<Keys> {
    let (table, primary_key) = table_and_key(target);
    let sql = match target.delete_policy().kind {
        DeleteKind::Hard => {
            format!("DELETE FROM {table} WHERE {column} = ANY($1) RETURNING {primary_key}")
        }
        DeleteKind::Soft => format!(
            "UPDATE {table} SET deleted_at = NOW() \
             WHERE {column} = ANY($1) AND deleted_at IS NULL \
             RETURNING {primary_key}"
        ),
    };

    let rows = match keys {
        Keys::Text(v) => sqlx::query(&sql).bind(v.as_slice()).fetch_all(&mut *conn).await?,
        Keys::Int(v) => sqlx::query(&sql).bind(v.as_slice()).fetch_all(&mut *conn).await?,
    };

    let touched = match target {
        EntityKind::User => Keys::Text(
            rows.iter()
                .map(|row| row.try_get::<String, _>(0))
                .collect::<Result<_, _>>()?,
        ),
        _ => Keys::Int(
            rows.iter()
                .map(|row| row.try_get::<DbId, _>(0))
                .collect::<Result<_, _>>()?,
        ),
    };
    Ok(touched)
}
