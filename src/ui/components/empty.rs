//! Empty state component renderer.

use crate::ui::helpers::push_escaped;
use crate::ui::viewmodel::EmptyState;

/// Appends the empty state paragraph to `out`.
pub fn render_empty_state(out: &mut String, empty: &EmptyState) {
    out.push_str("<p class=\"shopping-list-empty\">");
    push_escaped(out, &empty.message);
    out.push_str("</p>\n");
}
