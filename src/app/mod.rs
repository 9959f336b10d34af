//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host page and the domain/ui layers. The host
//! owns one [`ListStore`], feeds page events through [`handle_event`], and
//! performs the returned [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! Page Event → Event → handle_event → ListStore mutation → Actions → Render
//!                                                                      ↓
//!                                                     project(&ListStore) → rows
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and store dispatch
//! - [`state`]: The authoritative list store
//!
//! # Example
//!
//! ```rust
//! use shopping_list::app::{handle_event, Event, ListStore};
//!
//! let mut store = ListStore::new();
//! let actions = handle_event(&mut store, &Event::HideCheckedChanged(true));
//! assert!(store.hide_checked());
//! # let _ = actions;
//! ```

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::ListStore;
