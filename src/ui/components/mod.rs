//! Composable markup component renderers.
//!
//! Each component appends one part of the page to a shared `String` buffer.
//!
//! # Components
//!
//! - [`header`]: Title with counts and the hide-checked checkbox
//! - [`search`]: Active search banner with the clear-search control
//! - [`list`]: The item rows with their controls
//! - [`empty`]: Message shown when no rows are visible
//!
//! # Layout
//!
//! ```text
//! [Header + hide-checked checkbox]
//! [Search banner]          (only while a term is set)
//! [List rows | Empty state]
//! ```

mod empty;
mod header;
mod list;
mod search;

use crate::ui::viewmodel::ListViewModel;

use empty::render_empty_state;
use header::render_header;
use list::render_list;
use search::render_search_bar;

/// Appends the full list section for `vm` to `out`.
pub fn render_list_section(out: &mut String, vm: &ListViewModel) {
    render_header(out, &vm.header, vm.hide_checked);

    if let Some(search) = &vm.search_bar {
        render_search_bar(out, search);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty);
        return;
    }

    let term = vm.search_bar.as_ref().map(|search| search.term.as_str());
    render_list(out, &vm.rows, term);
}
