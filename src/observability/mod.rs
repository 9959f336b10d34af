//! Structured logging for the shopping list.
//!
//! All layers log through `tracing` macros: spans around event handling and
//! projection, debug events for every accepted or rejected store mutation. This
//! module only wires a subscriber; embedding hosts that install their own
//! subscriber can skip it.
//!
//! # Configuration
//!
//! The filter comes from `trace_level` in [`Config`](crate::Config), using
//! `EnvFilter` directive syntax (`"debug"`, `"shopping_list=trace"`, ...).
//! Default: `"info"`.
//!
//! # Usage
//!
//! ```rust
//! use shopping_list::observability::init_tracing;
//! use shopping_list::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("shopping list ready");
//! ```

mod init;

pub use init::init_tracing;
