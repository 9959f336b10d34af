//! Header component renderer.
//!
//! Renders the list title with its visible/total counts and the hide-checked
//! checkbox reflecting the current filter.

use crate::ui::helpers::push_escaped;
use crate::ui::viewmodel::HeaderInfo;

/// Appends the header markup to `out`.
///
/// # Layout
///
/// ```text
/// <header class="shopping-list-header">
///   <h2 class="js-list-title">Shopping List (3/4)</h2>
///   <label><input type="checkbox" class="display-checkbox" checked> hide checked</label>
/// </header>
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, hide_checked: bool) {
    out.push_str("<header class=\"shopping-list-header\">\n");
    out.push_str("  <h2 class=\"js-list-title\">");
    push_escaped(out, &header.title);
    out.push_str("</h2>\n");
    out.push_str("  <label><input type=\"checkbox\" class=\"display-checkbox\"");
    if hide_checked {
        out.push_str(" checked");
    }
    out.push_str("> hide checked</label>\n");
    out.push_str("</header>\n");
}
