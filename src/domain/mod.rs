//! Domain layer for the shopping list.
//!
//! Core types independent of rendering and of the host page: the item model with
//! its stable identity, and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item model, id type and id generation
//!
//! # Examples
//!
//! ```
//! use shopping_list::domain::{IdGenerator, Item};
//!
//! let mut ids = IdGenerator::new();
//! let item = Item::new(ids.next_id(), "eggs");
//! assert_eq!(item.id.to_string(), "item-1");
//! ```

pub mod error;
pub mod item;

pub use error::{Result, ShoppingListError};
pub use item::{is_blank, IdGenerator, Item, ItemId};
