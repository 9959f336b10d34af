//! Error types for the shopping list crate.
//!
//! This module defines the centralized error type [`ShoppingListError`] and a type alias
//! [`Result`] for the host-boundary operations that can fail. Store mutations never
//! return errors: stale ids and blank names are resolved as no-ops inside
//! [`ListStore`](crate::app::ListStore). Errors only arise at the host boundary:
//! configuration loading, parsing of `data-item-id` attribute values, and encoding
//! rows for template-based hosts.

use thiserror::Error;

/// The main error type for shopping list operations.
///
/// # Examples
///
/// ```
/// use shopping_list::{ItemId, ShoppingListError};
///
/// let err = "row-7".parse::<ItemId>().unwrap_err();
/// assert!(matches!(err, ShoppingListError::InvalidItemId(_)));
/// ```
#[derive(Debug, Error)]
pub enum ShoppingListError {
    /// Configuration is invalid or could not be parsed.
    ///
    /// The string describes the specific configuration problem, including the
    /// underlying TOML parser message when one exists.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from reading a configuration file. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An item id attribute did not have the `item-<n>` form.
    ///
    /// Raised when the host hands back a `data-item-id` value that this crate
    /// never rendered. A well-formed id for a deleted item is *not* an error.
    #[error("Invalid item id: {0:?}")]
    InvalidItemId(String),

    /// Projected rows could not be encoded for the host.
    #[error("Render error: {0}")]
    Render(String),
}

/// A specialized `Result` type for shopping list operations.
pub type Result<T> = std::result::Result<T, ShoppingListError>;
