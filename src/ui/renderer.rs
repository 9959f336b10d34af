//! Top-level rendering coordinator.
//!
//! The renderer is a pure function of its view model: it never queries or
//! remembers prior output, so the host simply replaces the list section with the
//! returned markup after every event.
//!
//! # Architecture
//!
//! 1. **View Model Computation**: `ListStore` → `ListViewModel`
//! 2. **Component Rendering**: header, search banner, rows or empty state
//!
//! # Example
//!
//! ```rust
//! use shopping_list::{render, ListStore};
//!
//! let store = ListStore::with_items([("milk", true)]);
//! let html = render(&store);
//! assert!(html.contains("shopping-item__checked"));
//! ```

use crate::app::ListStore;
use crate::ui::components;
use crate::ui::viewmodel::{compute_viewmodel, ListViewModel};

/// Renders the list section markup for the current store state.
#[must_use]
pub fn render(store: &ListStore) -> String {
    let viewmodel = compute_viewmodel(store);
    render_viewmodel(&viewmodel)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &ListViewModel) -> String {
    let mut out = String::new();
    components::render_list_section(&mut out, vm);
    tracing::trace!(rows = vm.rows.len(), bytes = out.len(), "list rendered");
    out
}
