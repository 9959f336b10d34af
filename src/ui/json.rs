//! JSON encoding of projected rows.
//!
//! For hosts that render with client-side templates instead of the markup
//! renderer: the rows are handed over as a JSON array of
//! `{ "id": "item-<n>", "name": ..., "checked": ..., "is_editing": ... }` objects.

use crate::app::ListStore;
use crate::domain::error::{Result, ShoppingListError};
use crate::ui::projector::project;
use crate::ui::viewmodel::ViewRow;

/// Serializes `rows` as a JSON array.
///
/// # Errors
///
/// Returns [`ShoppingListError::Render`] if serialization fails.
pub fn rows_to_json(rows: &[ViewRow]) -> Result<String> {
    serde_json::to_string(rows)
        .map_err(|e| ShoppingListError::Render(format!("failed to serialize rows: {e}")))
}

/// Projects `store` and serializes the visible rows.
///
/// # Errors
///
/// See [`rows_to_json`].
pub fn project_to_json(store: &ListStore) -> Result<String> {
    rows_to_json(&project(store))
}
