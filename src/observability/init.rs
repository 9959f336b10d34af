//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when the configuration sets none.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// Installs a registry with:
/// 1. An `EnvFilter` built from `config.trace_level` (default `"info"`)
/// 2. A compact `fmt` layer writing to stderr
///
/// # Initialization Behavior
///
/// - Invalid directives fall back to the default level
/// - Idempotent: only the first call installs a subscriber; later calls (and
///   calls after another subscriber was installed) are silently ignored
///
/// # Example
///
/// ```rust
/// use shopping_list::observability::init_tracing;
/// use shopping_list::Config;
///
/// let config = Config {
///     trace_level: Some("shopping_list=debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
