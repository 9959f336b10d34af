//! Event handling and state transition logic.
//!
//! This module translates page events into [`ListStore`] calls and collects the
//! side effects the host must perform afterwards.
//!
//! # Architecture
//!
//! 1. The host turns a raw UI event (submit, click, change) into an [`Event`],
//!    parsing the row id from its `data-item-id` attribute
//! 2. [`handle_event`] applies the matching store operation
//! 3. The returned actions are executed in order, ending with a re-render
//!
//! Stale ids (a row clicked after its item was deleted) are handled by the store
//! as no-ops, so every event still re-renders from a consistent state.
//!
//! # Example
//!
//! ```rust
//! use shopping_list::{handle_event, Event, ListStore};
//!
//! let mut store = ListStore::with_items([("milk", false)]);
//! let id = store.items()[0].id;
//! handle_event(&mut store, &Event::ToggleClicked(id));
//! assert!(store.get(id).unwrap().checked);
//! ```

use crate::app::{Action, ListStore};
use crate::domain::ItemId;

/// Events raised by the shopping list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The new-item form was submitted with the entry field's value.
    AddItemSubmitted {
        /// Raw entry field text.
        name: String,
    },
    /// The check button of a row was clicked.
    ToggleClicked(ItemId),
    /// The delete button of a row was clicked.
    DeleteClicked(ItemId),
    /// The name text of a row was clicked.
    ItemNameClicked(ItemId),
    /// The edit form of a row was submitted.
    EditSubmitted {
        /// Row whose edit form was submitted.
        id: ItemId,
        /// Raw edit field text.
        name: String,
    },
    /// Edit mode was abandoned without submitting.
    EditCancelled,
    /// The search form was submitted.
    SearchSubmitted {
        /// Raw search field text, applied verbatim.
        term: String,
    },
    /// The clear-search control was clicked.
    ClearSearchClicked,
    /// The hide-checked checkbox changed.
    HideCheckedChanged(bool),
}

/// Processes an event, mutates the store, and returns actions to execute.
///
/// The returned list always ends with [`Action::Render`].
///
/// # Tracing
///
/// Each call runs inside a debug-level span carrying the event.
pub fn handle_event(store: &mut ListStore, event: &Event) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let mut actions = match event {
        Event::AddItemSubmitted { name } => {
            store.add_item(name.as_str());
            vec![Action::ClearEntryInput]
        }
        Event::ToggleClicked(id) => {
            store.toggle_checked(*id);
            vec![]
        }
        Event::DeleteClicked(id) => {
            store.delete_item(*id);
            vec![]
        }
        Event::ItemNameClicked(id) => {
            if store.set_editing(Some(*id)) {
                vec![Action::FocusEditInput(*id)]
            } else {
                vec![]
            }
        }
        Event::EditSubmitted { id, name } => {
            if !store.rename_item(*id, name.as_str()) && store.editing_id() == Some(*id) {
                // Blank submission keeps the old name and closes the form.
                tracing::debug!(item_id = %id, "rename rejected, leaving edit mode");
                store.stop_editing();
            }
            vec![]
        }
        Event::EditCancelled => {
            store.stop_editing();
            vec![]
        }
        Event::SearchSubmitted { term } => {
            store.set_search_term(Some(term.clone()));
            vec![]
        }
        Event::ClearSearchClicked => {
            store.set_search_term(None);
            vec![Action::ClearSearchInput]
        }
        Event::HideCheckedChanged(hide) => {
            store.set_hide_checked(*hide);
            vec![]
        }
    };

    actions.push(Action::Render);
    tracing::debug!(action_count = actions.len(), "event handled");
    actions
}
