//! Search banner component renderer.
//!
//! Shown only while a search term is active: names the term and offers the
//! clear-search control.

use crate::ui::helpers::push_escaped;
use crate::ui::viewmodel::SearchBarInfo;

/// Appends the search banner markup to `out`.
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo) {
    out.push_str("<div class=\"search-results\">\n");
    out.push_str("  <span class=\"search-results-label\">Results for \"");
    push_escaped(out, &search.term);
    out.push_str("\"</span>\n");
    out.push_str("  <button type=\"button\" class=\"js-clear-search-button\">clear search</button>\n");
    out.push_str("</div>\n");
}
