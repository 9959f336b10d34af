//! Shared rendering utilities.
//!
//! Low-level helpers used by several components: HTML escaping and search match
//! highlighting. Everything here writes into a caller-supplied `String` so the
//! renderer stays a pure function of its view model.
//!
//! # Example
//!
//! ```rust
//! use shopping_list::ui::helpers::{match_ranges, push_highlighted};
//!
//! assert_eq!(match_ranges("Bread & butter", "BUT"), vec![(8, 11)]);
//!
//! let mut out = String::new();
//! push_highlighted(&mut out, "Bread & butter", "but");
//! assert_eq!(out, "Bread &amp; <mark>but</mark>ter");
//! ```

/// Appends `text` to `out` with HTML special characters escaped.
pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Returns `text` with HTML special characters escaped.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Finds non-overlapping, case-insensitive occurrences of `term` in `text`.
///
/// Returns `(start, end)` byte ranges into `text` (exclusive end), always on char
/// boundaries. An empty term yields no ranges. Matching is literal: no character
/// in `term` has pattern meaning.
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut cursor = 0;

    for (start, _) in text.char_indices() {
        if start < cursor {
            continue;
        }
        if let Some(len) = match_len_at(&text[start..], &needle) {
            ranges.push((start, start + len));
            cursor = start + len;
        }
    }

    ranges
}

/// Byte length of the prefix of `text` whose lowercase form equals `needle`.
fn match_len_at(text: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;

    for (offset, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            if matched == needle.len() || lower != needle[matched] {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }

    None
}

/// Appends escaped `text` to `out`, wrapping matches of `term` in `<mark>`.
pub fn push_highlighted(out: &mut String, text: &str, term: &str) {
    let mut current = 0;

    for (start, end) in match_ranges(text, term) {
        push_escaped(out, &text[current..start]);
        out.push_str("<mark>");
        push_escaped(out, &text[start..end]);
        out.push_str("</mark>");
        current = end;
    }

    push_escaped(out, &text[current..]);
}
