//! View model types representing renderable list state.
//!
//! View models are snapshots computed from a [`ListStore`]; they own copies of
//! the data they show, so nothing rendered holds a reference into the store
//! across a mutation. [`ViewRow`] is the per-item projection produced by
//! [`project`](crate::ui::project); [`ListViewModel`] adds the surrounding page
//! chrome (title, search banner, empty state).
//!
//! # Example
//!
//! ```rust
//! use shopping_list::{compute_viewmodel, ListStore};
//!
//! let store = ListStore::with_items([("bread", false)]);
//! let vm = compute_viewmodel(&store);
//! assert_eq!(vm.header.title, "Shopping List (1/1)");
//! assert!(vm.empty_state.is_none());
//! ```

use crate::app::ListStore;
use crate::domain::ItemId;
use crate::ui::projector::project;
use serde::Serialize;

/// One rendered row: a copy of an item plus its edit-mode flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRow {
    pub id: ItemId,
    pub name: String,
    pub checked: bool,
    /// Whether the row renders as an edit form instead of static text.
    pub is_editing: bool,
}

/// Complete view model for one render of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// Visible rows in store order.
    pub rows: Vec<ViewRow>,

    /// Title with visible and total counts.
    pub header: HeaderInfo,

    /// Present while a search term is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Mirrors the hide-checked checkbox.
    pub hide_checked: bool,

    /// Present when no rows are visible.
    pub empty_state: Option<EmptyState>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Search banner display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// The active term, verbatim.
    pub term: String,
}

/// Message shown in place of the list when nothing is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

/// Computes the full view model for the current store state.
#[must_use]
pub fn compute_viewmodel(store: &ListStore) -> ListViewModel {
    let rows = project(store);

    let header = HeaderInfo {
        title: format!("Shopping List ({}/{})", rows.len(), store.len()),
    };

    let search_bar = store.search_term().map(|term| SearchBarInfo {
        term: term.to_string(),
    });

    let empty_state = if !rows.is_empty() {
        None
    } else if store.is_empty() {
        Some(EmptyState {
            message: "Your shopping list is empty".to_string(),
        })
    } else {
        Some(EmptyState {
            message: "No items match your filters".to_string(),
        })
    };

    ListViewModel {
        rows,
        header,
        search_bar,
        hide_checked: store.hide_checked(),
        empty_state,
    }
}
