//! Shared response types for API handlers.
//!
//! Single-row reads answer `200` with the row, or with an empty object `{}`
//! when nothing matched; use [`OptionalRow`] rather than building that shape
//! by hand. Mutations answer with the affected id or a [`DeletedResponse`].

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single-row lookup result that serializes as `{}` when absent.
///
/// # Example
///
/// ```ignore
/// let toon = ToonRepo::find_by_id(&state.pool, id).await?;
/// Ok(Json(OptionalRow(toon)))
/// ```
#[derive(Debug)]
pub struct OptionalRow<T>(pub Option<T>);

impl<T: Serialize> Serialize for OptionalRow<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(row) => row.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Body of every successful `DELETE`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

impl DeletedResponse {
    pub fn ok() -> Self {
        Self { deleted: true }
    }
}
