//! Logging initialization from the site configuration
//!
//! The minimum level and console switch come from `config.yaml`
//! (`host.logger.min_level`, `host.logger.enable_console`); a `RUST_LOG`
//! environment variable overrides the configured level entirely.

use mfmconfig::get_config;
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Install the global tracing subscriber
///
/// Call once, before anything logs. With the console disabled in the
/// configuration, the filter is still installed but no output layer is,
/// so log events go nowhere.
pub fn init_logging() {
    let config = get_config();

    let min_level = match config.get_log_min_level() {
        Ok(l) => l,
        Err(_) => "INFO".to_string(),
    };

    let enable_console = match config.get_log_enable_console() {
        Ok(b) => b,
        Err(_) => true,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(min_level));

    let subscriber = Registry::default().with(filter);

    if enable_console {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(true),
            )
            .init();
    } else {
        subscriber.init();
    }
}
