//! Actions representing side effects to be executed by the host page.
//!
//! This module defines the [`Action`] type, the commands produced by the event
//! handler after a store mutation. The store itself is pure state; anything that
//! touches the page (re-rendering, clearing an input box, moving focus) is returned
//! as an action and performed by the host.
//!
//! # Example
//!
//! ```rust
//! use shopping_list::{handle_event, Action, Event, ListStore};
//!
//! let mut store = ListStore::new();
//! let actions = handle_event(&mut store, &Event::AddItemSubmitted { name: "eggs".into() });
//! assert_eq!(actions, vec![Action::ClearEntryInput, Action::Render]);
//! ```

use crate::domain::ItemId;

/// Commands representing side effects to be executed by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Re-project the store and replace the rendered list.
    ///
    /// Emitted last for every handled event.
    Render,

    /// Empties the new-item entry field.
    ///
    /// Sent after every add submission, whether or not the name was accepted.
    ClearEntryInput,

    /// Empties the search field.
    ///
    /// Sent after the clear-search control is used.
    ClearSearchInput,

    /// Moves keyboard focus into the edit input of the given row.
    ///
    /// Sent after an item enters edit mode and the list has been re-rendered.
    FocusEditInput(ItemId),
}
