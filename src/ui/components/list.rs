//! List component renderer.
//!
//! Renders each [`ViewRow`] as one `<li>` carrying its id in `data-item-id`.
//! Rows in edit mode show a pre-filled edit form; the others show the name, with
//! the checked style and any search matches highlighted. Every row gets the check
//! and delete controls.

use crate::ui::helpers::{push_escaped, push_highlighted};
use crate::ui::viewmodel::ViewRow;

/// Appends the `<ul>` with all rows to `out`.
///
/// `term` is the active search term, used only for match highlighting.
pub fn render_list(out: &mut String, rows: &[ViewRow], term: Option<&str>) {
    out.push_str("<ul class=\"shopping-list js-shopping-list\">\n");
    for row in rows {
        render_row(out, row, term);
    }
    out.push_str("</ul>\n");
}

/// Appends a single row.
///
/// # Layout
///
/// ```text
/// <li class="js-item-id-element" data-item-id="item-3">
///   <span class="shopping-item js-shopping-item shopping-item__checked">milk</span>
///   <div class="shopping-item-controls">
///     <button class="shopping-item-toggle js-item-toggle">...check...</button>
///     <button class="shopping-item-delete js-item-delete">...delete...</button>
///   </div>
/// </li>
/// ```
fn render_row(out: &mut String, row: &ViewRow, term: Option<&str>) {
    out.push_str(&format!(
        "  <li class=\"js-item-id-element\" data-item-id=\"{}\">\n",
        row.id
    ));

    if row.is_editing {
        out.push_str("    <form id=\"edit-item-form\">\n");
        out.push_str("      <input class=\"item-edit-input\" type=\"text\" required value=\"");
        push_escaped(out, &row.name);
        out.push_str("\">\n");
        out.push_str("    </form>\n");
    } else {
        out.push_str("    <span class=\"shopping-item js-shopping-item");
        if row.checked {
            out.push_str(" shopping-item__checked");
        }
        out.push_str("\">");
        match term {
            Some(term) => push_highlighted(out, &row.name, term),
            None => push_escaped(out, &row.name),
        }
        out.push_str("</span>\n");
    }

    out.push_str("    <div class=\"shopping-item-controls\">\n");
    out.push_str("      <button class=\"shopping-item-toggle js-item-toggle\">\n");
    out.push_str("        <span class=\"button-label\">check</span>\n");
    out.push_str("      </button>\n");
    out.push_str("      <button class=\"shopping-item-delete js-item-delete\">\n");
    out.push_str("        <span class=\"button-label\">delete</span>\n");
    out.push_str("      </button>\n");
    out.push_str("    </div>\n");
    out.push_str("  </li>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    fn row(name: &str, checked: bool, is_editing: bool) -> ViewRow {
        ViewRow {
            id: "item-7".parse::<ItemId>().unwrap(),
            name: name.to_string(),
            checked,
            is_editing,
        }
    }

    fn render_one(row: &ViewRow, term: Option<&str>) -> String {
        let mut out = String::new();
        render_list(&mut out, std::slice::from_ref(row), term);
        out
    }

    #[test]
    fn test_viewing_row() {
        let out = render_one(&row("milk", false, false), None);

        assert!(out.contains("data-item-id=\"item-7\""));
        assert!(out.contains("<span class=\"shopping-item js-shopping-item\">milk</span>"));
        assert!(out.contains("js-item-toggle"));
        assert!(out.contains("js-item-delete"));
        assert!(!out.contains("edit-item-form"));
    }

    #[test]
    fn test_checked_row_class() {
        let out = render_one(&row("milk", true, false), None);
        assert!(out.contains("js-shopping-item shopping-item__checked\">milk"));
    }

    #[test]
    fn test_editing_row_prefilled_and_escaped() {
        let out = render_one(&row("\"fancy\" <cheese>", false, true), None);

        assert!(out.contains("<form id=\"edit-item-form\">"));
        assert!(out.contains("value=\"&quot;fancy&quot; &lt;cheese&gt;\""));
        assert!(!out.contains("js-shopping-item"));
        assert!(out.contains("js-item-toggle"));
    }

    #[test]
    fn test_highlight_in_viewing_row() {
        let out = render_one(&row("Oranges", false, false), Some("RAN"));
        assert!(out.contains(">O<mark>ran</mark>ges</span>"));
    }
}
