//! Shopping list: state store and view projection for a single-page shopping list.
//!
//! The crate provides the client-side core of a shopping list page:
//! - An authoritative [`ListStore`] of named, checkable items with stable ids
//! - Search (literal, case-insensitive) and hide-checked view filters
//! - Edit-in-place with at most one item in edit mode
//! - A pure [`project`] function deriving the rows to render
//! - Markup rendering and typed page events for the host page

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host page (out of crate)                           │  ← DOM events, innerHTML
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling → store mutations → actions       │
//! │  - ListStore: items, search term, hide-checked,     │
//! │    editing id                                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - project: store → rows                            │
//! │  - view model, markup components, JSON rows         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Item, ItemId, id generation                      │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Store, events and actions
//! - [`domain`]: Item model and errors
//! - [`ui`]: Projection, view models and rendering
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! The initial list and filters come from a [`Config`], either built in code,
//! parsed from TOML:
//!
//! ```toml
//! hide_checked = false
//! trace_level = "info"
//!
//! [[items]]
//! name = "apples"
//!
//! [[items]]
//! name = "milk"
//! checked = true
//! ```
//!
//! or read from the host element's key/value attributes with
//! [`Config::from_attributes`].
//!
//! # Example
//!
//! ```rust
//! use shopping_list::{handle_event, initialize, project, Action, Config, Event};
//!
//! let mut store = initialize(&Config::default());
//!
//! let actions = handle_event(&mut store, &Event::AddItemSubmitted { name: "eggs".into() });
//! assert_eq!(actions.last(), Some(&Action::Render));
//!
//! let eggs = store.items().last().unwrap().id;
//! handle_event(&mut store, &Event::ToggleClicked(eggs));
//!
//! let rows = project(&store);
//! assert_eq!(rows.last().unwrap().name, "eggs");
//! assert!(rows.last().unwrap().checked);
//! ```
//!
//! # Key Design Decisions
//!
//! ## Stable Ids
//!
//! Rows are addressed by generated ids, never by position, so clicks on a
//! filtered or stale list always reach the intended item or nothing at all.
//!
//! ## Silent No-ops
//!
//! Unknown ids and blank names leave the store untouched and are only logged.
//! The store has no I/O and no fatal error class.
//!
//! ## Pure Rendering
//!
//! Rendering is a function of the view model alone; the host replaces the list
//! markup after each event instead of patching previously rendered elements.

pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, Event, ListStore};
pub use domain::{Item, ItemId, Result, ShoppingListError};
pub use ui::{compute_viewmodel, project, render, ListViewModel, ViewRow};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One entry of the initial list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedItem {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

impl SeedItem {
    fn new(name: &str, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            checked,
        }
    }
}

/// Page configuration.
///
/// Missing fields take their defaults, so an empty TOML document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial items in display order.
    ///
    /// Default: apples, oranges, milk (checked), bread. Blank names are skipped.
    pub items: Vec<SeedItem>,

    /// Initial state of the hide-checked filter. Default: `false`
    pub hide_checked: bool,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items: vec![
                SeedItem::new("apples", false),
                SeedItem::new("oranges", false),
                SeedItem::new("milk", true),
                SeedItem::new("bread", false),
            ],
            hide_checked: false,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ShoppingListError::Config`] if the document is not valid TOML or a
    /// field has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ShoppingListError::Config(format!("failed to parse config TOML: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShoppingListError::Io`] if the file cannot be read and
    /// [`ShoppingListError::Config`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading config file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from host-supplied key/value attributes.
    ///
    /// # Parsing Rules
    ///
    /// - `items`: Comma-separated names, all unchecked (empty entries dropped).
    ///   Absent key keeps the default list; present but empty gives an empty list.
    /// - `hide_checked`: `true`/`false` (falls back to `false` on anything else)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shopping_list::Config;
    ///
    /// let mut attrs = BTreeMap::new();
    /// attrs.insert("items".to_string(), "eggs, flour,,sugar".to_string());
    /// attrs.insert("hide_checked".to_string(), "true".to_string());
    ///
    /// let config = Config::from_attributes(&attrs);
    /// let names: Vec<_> = config.items.iter().map(|i| i.name.as_str()).collect();
    /// assert_eq!(names, vec!["eggs", "flour", "sugar"]);
    /// assert!(config.hide_checked);
    /// ```
    #[must_use]
    pub fn from_attributes(attributes: &BTreeMap<String, String>) -> Self {
        let items = attributes.get("items").map_or_else(
            || Self::default().items,
            |s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(|name| SeedItem::new(name, false))
                    .collect()
            },
        );

        let hide_checked = attributes
            .get("hide_checked")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            items,
            hide_checked,
            trace_level: attributes.get("trace_level").cloned(),
        }
    }
}

/// Builds the store for a page session from configuration.
///
/// Seeds the items in order and applies the initial hide-checked flag. Search and
/// edit mode always start cleared.
///
/// # Example
///
/// ```rust
/// use shopping_list::{initialize, Config};
///
/// let store = initialize(&Config::default());
/// assert_eq!(store.len(), 4);
/// assert_eq!(store.checked_count(), 1);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> ListStore {
    tracing::debug!(seed_items = config.items.len(), "initializing shopping list");

    let mut store = ListStore::with_items(
        config
            .items
            .iter()
            .map(|seed| (seed.name.as_str(), seed.checked)),
    );
    store.set_hide_checked(config.hide_checked);
    store
}
