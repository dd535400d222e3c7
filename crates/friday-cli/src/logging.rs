//! Structured logging with environment variable configuration.
//!
//! Logs go to stderr so reports on stdout stay machine-readable. Records
//! emitted through the `log` facade by the `friday` library are forwarded to
//! the same subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest): the `--log-level` flag, the
/// `FRIDAY_LOG_LEVEL` variable, then the default of `warn`.
///
/// A subscriber that is already installed is left in place.
pub(crate) fn init_logging(config: &CliConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}
