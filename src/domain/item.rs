//! Shopping list item model and identity.
//!
//! Items are identified by an [`ItemId`] assigned once at creation and never reused,
//! so references held by rendered rows stay valid (or cleanly stale) across deletes,
//! renames and filter changes. Ids are rendered into markup as `item-<n>` and parsed
//! back from the same form.

use crate::domain::error::{Result, ShoppingListError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix used when an id is written into a `data-item-id` attribute.
const ID_PREFIX: &str = "item-";

/// Stable identifier of a shopping list item.
///
/// Serializes as the same `item-<n>` string used in markup, so ids taken from
/// JSON rows parse back with [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ItemId(u64);

impl ItemId {
    /// Returns the raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ID_PREFIX}{}", self.0)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ItemId {
    type Error = ShoppingListError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl FromStr for ItemId {
    type Err = ShoppingListError;

    /// Parses the `item-<n>` form produced by `Display`.
    ///
    /// # Errors
    ///
    /// Returns [`ShoppingListError::InvalidItemId`] when the prefix is missing or the
    /// suffix is not a decimal `u64`.
    fn from_str(s: &str) -> Result<Self> {
        s.strip_prefix(ID_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u64>().ok())
            .map(Self)
            .ok_or_else(|| ShoppingListError::InvalidItemId(s.to_string()))
    }
}

/// Monotonic id source owned by a single store.
///
/// Ids start at 1 and only ever increase, so an id is never handed out twice
/// for the lifetime of the generator, even after the item carrying it is deleted.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Creates a generator whose first id is `item-1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Returns a fresh, never-before-issued id.
    pub fn next_id(&mut self) -> ItemId {
        self.last += 1;
        ItemId(self.last)
    }
}

/// One shopping list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub checked: bool,
}

impl Item {
    /// Creates an unchecked item.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            checked: false,
        }
    }
}

/// Returns `true` for names that are empty or contain only whitespace.
///
/// Such names are rejected by both add and rename.
#[must_use]
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}
