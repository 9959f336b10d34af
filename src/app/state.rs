//! Shopping list state container.
//!
//! This module defines [`ListStore`], the single source of truth for the page:
//! the ordered item collection plus the view settings (search term, hide-checked
//! flag, and the one item currently being edited). It knows nothing about
//! rendering; [`project`](crate::ui::project) derives the visible rows from it.
//!
//! # State Components
//!
//! - **Items**: Insertion-ordered entries with stable ids
//! - **Search Term**: Optional literal filter, stored verbatim
//! - **Hide Checked**: Excludes checked items from the view when set
//! - **Editing Id**: The single item rendered as an edit form, if any
//!
//! # Consistency
//!
//! Every mutation runs to completion before returning. Deleting or renaming the
//! item under edit clears `editing_id` in the same call, so no caller can observe
//! an editing id that points at a missing item.
//!
//! Calls referencing an unknown id, or submitting a blank name, are no-ops. They
//! come from stale rows or empty form submissions and are logged at debug level
//! rather than surfaced.
//!
//! # Example
//!
//! ```rust
//! use shopping_list::ListStore;
//!
//! let mut store = ListStore::new();
//! let eggs = store.add_item("eggs").unwrap();
//! store.toggle_checked(eggs);
//! assert!(store.get(eggs).unwrap().checked);
//! ```

use crate::domain::{is_blank, IdGenerator, Item, ItemId};

/// Central shopping list state container.
///
/// Owned by one controller and mutated only through the methods below. Fields are
/// private so the id-uniqueness and editing invariants cannot be bypassed.
#[derive(Debug, Clone, Default)]
pub struct ListStore {
    /// Items in insertion order.
    items: Vec<Item>,

    /// Source of fresh ids. Never rewound.
    ids: IdGenerator,

    /// Active search filter. `Some("")` is a valid filter that matches everything.
    search_term: Option<String>,

    /// When set, checked items are left out of the view.
    hide_checked: bool,

    /// Item currently rendered in edit mode. Always references a live item.
    editing_id: Option<ItemId>,
}

impl ListStore {
    /// Creates an empty store with no filters and nothing in edit mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `(name, checked)` pairs, in order.
    ///
    /// Blank names are skipped, matching [`add_item`](Self::add_item).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopping_list::ListStore;
    ///
    /// let store = ListStore::with_items([("apples", false), ("milk", true)]);
    /// assert_eq!(store.len(), 2);
    /// assert_eq!(store.checked_count(), 1);
    /// ```
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for (name, checked) in items {
            if let Some(id) = store.add_item(name) {
                if checked {
                    store.toggle_checked(id);
                }
            }
        }
        store
    }

    /// Returns all items in store order, ignoring filters.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item with `id`, if it is still live.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of checked items, regardless of filters.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    #[must_use]
    pub const fn hide_checked(&self) -> bool {
        self.hide_checked
    }

    #[must_use]
    pub const fn editing_id(&self) -> Option<ItemId> {
        self.editing_id
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Appends a new unchecked item and returns its id.
    ///
    /// Blank names (empty or whitespace-only) are rejected and `None` is returned.
    /// Accepted names are stored exactly as submitted.
    pub fn add_item(&mut self, name: impl Into<String>) -> Option<ItemId> {
        let name = name.into();
        if is_blank(&name) {
            tracing::debug!(name_len = name.len(), "add ignored, blank name");
            return None;
        }

        let id = self.ids.next_id();
        tracing::debug!(item_id = %id, name = %name, "item added");
        self.items.push(Item::new(id, name));
        Some(id)
    }

    /// Flips the checked flag of the item with `id`.
    ///
    /// Returns `false` without changing anything if the item no longer exists.
    pub fn toggle_checked(&mut self, id: ItemId) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(item_id = %id, "toggle ignored, item not found");
            return false;
        };

        item.checked = !item.checked;
        tracing::debug!(item_id = %id, checked = item.checked, "item toggled");
        true
    }

    /// Removes the item with `id`, keeping the order of the remaining items.
    ///
    /// If the item was being edited, edit mode is cleared in the same step.
    /// Returns `false` if the item no longer exists.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(item_id = %id, "delete ignored, item not found");
            return false;
        };

        self.items.remove(index);
        if self.editing_id == Some(id) {
            self.editing_id = None;
        }
        tracing::debug!(item_id = %id, remaining = self.items.len(), "item deleted");
        true
    }

    /// Renames the item with `id` and leaves edit mode if it was editing that item.
    ///
    /// Blank names are rejected without touching the item or the edit state; the
    /// event handler decides whether a rejected edit closes the form. Returns
    /// `false` on rejection or if the item no longer exists.
    pub fn rename_item(&mut self, id: ItemId, new_name: impl Into<String>) -> bool {
        let new_name = new_name.into();
        if is_blank(&new_name) {
            tracing::debug!(item_id = %id, "rename ignored, blank name");
            return false;
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(item_id = %id, "rename ignored, item not found");
            return false;
        };

        tracing::debug!(item_id = %id, old_name = %item.name, new_name = %new_name, "item renamed");
        item.name = new_name;
        if self.editing_id == Some(id) {
            self.editing_id = None;
        }
        true
    }

    /// Replaces the search filter verbatim. `None` clears it.
    ///
    /// The term is not trimmed: an all-whitespace term is a literal filter.
    pub fn set_search_term(&mut self, term: Option<String>) {
        tracing::debug!(term = ?term, "search term set");
        self.search_term = term;
    }

    /// Sets whether checked items are hidden from the view.
    pub fn set_hide_checked(&mut self, hide: bool) {
        tracing::debug!(hide_checked = hide, "hide checked set");
        self.hide_checked = hide;
    }

    /// Puts the item with `id` into edit mode, or leaves edit mode with `None`.
    ///
    /// Entering edit mode on one item implicitly returns any other item to viewing.
    /// An id that does not reference a live item is rejected and the current editing
    /// state is kept. Returns `true` if the call was accepted.
    pub fn set_editing(&mut self, id: Option<ItemId>) -> bool {
        if let Some(id) = id {
            if self.position(id).is_none() {
                tracing::debug!(item_id = %id, "edit ignored, item not found");
                return false;
            }
        }

        tracing::debug!(editing_id = ?id.map(|id| id.to_string()), "editing set");
        self.editing_id = id;
        true
    }

    /// Leaves edit mode. Equivalent to `set_editing(None)`.
    pub fn stop_editing(&mut self) {
        self.set_editing(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded() -> (ListStore, Vec<ItemId>) {
        let store = ListStore::with_items([
            ("apples", false),
            ("oranges", false),
            ("milk", true),
            ("bread", false),
        ]);
        let ids = store.items().iter().map(|item| item.id).collect();
        (store, ids)
    }

    fn names(store: &ListStore) -> Vec<&str> {
        store.items().iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_add_appends_unchecked() {
        let (mut store, _) = seeded();
        let id = store.add_item("eggs").unwrap();

        let last = store.items().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.name, "eggs");
        assert!(!last.checked);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let (mut store, _) = seeded();

        assert_eq!(store.add_item(""), None);
        assert_eq!(store.add_item("   "), None);
        assert_eq!(store.add_item("\t"), None);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_add_keeps_name_verbatim() {
        let mut store = ListStore::new();
        let id = store.add_item("  rye bread ").unwrap();
        assert_eq!(store.get(id).unwrap().name, "  rye bread ");
    }

    #[test]
    fn test_with_items_skips_blank_and_applies_checked() {
        let store = ListStore::with_items([("a", true), (" ", true), ("b", false)]);
        assert_eq!(names(&store), vec!["a", "b"]);
        assert_eq!(store.checked_count(), 1);
        assert!(store.items()[0].checked);
    }

    #[test]
    fn test_toggle_flips_and_flips_back() {
        let (mut store, ids) = seeded();

        assert!(store.toggle_checked(ids[0]));
        assert!(store.get(ids[0]).unwrap().checked);
        assert!(store.toggle_checked(ids[0]));
        assert!(!store.get(ids[0]).unwrap().checked);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let (mut store, ids) = seeded();
        store.delete_item(ids[1]);
        let before = store.items().to_vec();

        assert!(!store.toggle_checked(ids[1]));
        assert_eq!(store.items(), &before[..]);
    }

    #[test]
    fn test_delete_preserves_order() {
        let (mut store, ids) = seeded();

        assert!(store.delete_item(ids[1]));
        assert_eq!(names(&store), vec!["apples", "milk", "bread"]);
        assert!(!store.delete_item(ids[1]));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_editing_item_clears_editing() {
        let (mut store, ids) = seeded();
        store.set_editing(Some(ids[2]));

        store.delete_item(ids[2]);
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_delete_other_item_keeps_editing() {
        let (mut store, ids) = seeded();
        store.set_editing(Some(ids[2]));

        store.delete_item(ids[0]);
        assert_eq!(store.editing_id(), Some(ids[2]));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let (mut store, ids) = seeded();
        store.delete_item(ids[3]);
        let new_id = store.add_item("bread").unwrap();

        assert!(!ids.contains(&new_id));
        let unique: HashSet<_> = store.items().iter().map(|item| item.id).collect();
        assert_eq!(unique.len(), store.len());
    }

    #[test]
    fn test_rename_clears_editing() {
        let (mut store, ids) = seeded();
        store.set_editing(Some(ids[0]));

        assert!(store.rename_item(ids[0], "Green apples"));
        assert_eq!(store.get(ids[0]).unwrap().name, "Green apples");
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_rename_other_item_keeps_editing() {
        let (mut store, ids) = seeded();
        store.set_editing(Some(ids[0]));

        assert!(store.rename_item(ids[1], "Blood oranges"));
        assert_eq!(store.editing_id(), Some(ids[0]));
    }

    #[test]
    fn test_rename_blank_rejected_without_side_effects() {
        let (mut store, ids) = seeded();
        store.set_editing(Some(ids[0]));

        assert!(!store.rename_item(ids[0], "  "));
        assert_eq!(store.get(ids[0]).unwrap().name, "apples");
        assert_eq!(store.editing_id(), Some(ids[0]));
    }

    #[test]
    fn test_rename_unknown_is_noop() {
        let (mut store, ids) = seeded();
        store.delete_item(ids[0]);

        assert!(!store.rename_item(ids[0], "pears"));
        assert_eq!(names(&store), vec!["oranges", "milk", "bread"]);
    }

    #[test]
    fn test_set_editing_switches_item() {
        let (mut store, ids) = seeded();

        assert!(store.set_editing(Some(ids[0])));
        assert!(store.set_editing(Some(ids[3])));
        assert_eq!(store.editing_id(), Some(ids[3]));
    }

    #[test]
    fn test_set_editing_unknown_rejected() {
        let (mut store, ids) = seeded();
        store.set_editing(Some(ids[1]));
        store.delete_item(ids[0]);

        assert!(!store.set_editing(Some(ids[0])));
        assert_eq!(store.editing_id(), Some(ids[1]));
    }

    #[test]
    fn test_stop_editing() {
        let (mut store, ids) = seeded();
        store.set_editing(Some(ids[1]));

        store.stop_editing();
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_filters_never_touch_items() {
        let (mut store, _) = seeded();
        let before = store.items().to_vec();

        store.set_search_term(Some("zzz".to_string()));
        store.set_hide_checked(true);

        assert_eq!(store.items(), &before[..]);
        assert_eq!(store.search_term(), Some("zzz"));
        assert!(store.hide_checked());
    }

    #[test]
    fn test_search_term_stored_verbatim() {
        let mut store = ListStore::new();

        store.set_search_term(Some("  ".to_string()));
        assert_eq!(store.search_term(), Some("  "));
        store.set_search_term(None);
        assert_eq!(store.search_term(), None);
    }
}
