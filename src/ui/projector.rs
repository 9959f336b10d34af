//! Pure projection of store state into renderable rows.
//!
//! [`project`] derives the ordered, filtered rows to draw from a [`ListStore`]
//! snapshot. It never mutates the store and has no error cases, so it is safe to
//! call after every event and discard the result.
//!
//! # Filtering Algorithm
//!
//! 1. Start from the items in store order
//! 2. **Search**: if a term is set, keep items whose name contains the term as a
//!    literal substring, compared with the same per-character case folding the
//!    highlighter uses (an empty term keeps everything)
//! 3. **Hide checked**: if set, drop checked items
//! 4. Mark the row whose id equals the editing id
//!
//! The two filters commute; relative order is always preserved.

use crate::app::ListStore;
use crate::domain::Item;
use crate::ui::helpers::match_ranges;
use crate::ui::viewmodel::ViewRow;

/// Projects the store into the ordered sequence of rows to render.
///
/// # Example
///
/// ```rust
/// use shopping_list::{project, ListStore};
///
/// let mut store = ListStore::with_items([("Apples", false), ("milk", true)]);
/// store.set_search_term(Some("APP".to_string()));
///
/// let rows = project(&store);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].name, "Apples");
/// ```
#[must_use]
pub fn project(store: &ListStore) -> Vec<ViewRow> {
    let _span = tracing::debug_span!("project",
        total_items = store.len(),
        search_active = store.search_term().is_some(),
        hide_checked = store.hide_checked()
    ).entered();

    let term = store.search_term();
    let editing_id = store.editing_id();

    let rows: Vec<ViewRow> = store
        .items()
        .iter()
        .filter(|item| {
            term.map_or(true, |term| matches_search(item, term))
        })
        .filter(|item| !(store.hide_checked() && item.checked))
        .map(|item| ViewRow {
            id: item.id,
            name: item.name.clone(),
            checked: item.checked,
            is_editing: editing_id == Some(item.id),
        })
        .collect();

    tracing::debug!(visible_count = rows.len(), "rows projected");
    rows
}

/// Literal, case-insensitive containment.
///
/// Goes through [`match_ranges`] so every visible row has a highlight.
fn matches_search(item: &Item, term: &str) -> bool {
    term.is_empty() || !match_ranges(&item.name, term).is_empty()
}
