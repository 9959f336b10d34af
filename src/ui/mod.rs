//! User interface layer: projection, view models and markup rendering.
//!
//! This module turns a [`ListStore`](crate::app::ListStore) into what the page
//! shows. Everything here is a pure function of the store snapshot.
//!
//! # Architecture
//!
//! ```text
//! ListStore → project → Vec<ViewRow> → compute_viewmodel → ListViewModel → render → HTML
//!                             └──────────────────────────→ rows_to_json → JSON
//! ```
//!
//! # Modules
//!
//! - [`projector`]: The filter/shape function producing rows from store state
//! - [`viewmodel`]: Row and page view model types
//! - [`renderer`]: Top-level markup rendering
//! - [`components`]: Markup component renderers
//! - [`helpers`]: Escaping and match highlighting
//! - [`json`]: JSON encoding of rows for template-based hosts
//!
//! # Example
//!
//! ```rust
//! use shopping_list::ui::{project, render};
//! use shopping_list::ListStore;
//!
//! let store = ListStore::with_items([("bread", false)]);
//! assert_eq!(project(&store).len(), 1);
//! assert!(render(&store).contains("bread"));
//! ```

pub mod components;
pub mod helpers;
pub mod json;
pub mod projector;
pub mod renderer;
pub mod viewmodel;

pub use json::{project_to_json, rows_to_json};
pub use projector::project;
pub use renderer::{render, render_viewmodel};
pub use viewmodel::{compute_viewmodel, EmptyState, HeaderInfo, ListViewModel, SearchBarInfo, ViewRow};
