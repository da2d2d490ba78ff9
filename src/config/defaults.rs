//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::path::PathBuf;

use crate::dispatch::{DEFAULT_ALERT_ENDPOINT, DEFAULT_CHANGE_ENDPOINT, RetryPolicy};

/// Default endpoint for alert events.
pub const ALERT_ENDPOINT: &str = DEFAULT_ALERT_ENDPOINT;

/// Default endpoint for change events.
pub const CHANGE_ENDPOINT: &str = DEFAULT_CHANGE_ENDPOINT;

/// Retries are off unless requested.
pub const RETRIES_ENABLED: bool = false;

/// Default backoff ladder for 500 responses, in milliseconds.
pub const SERVER_ERROR_DELAYS_MS: [u64; 3] = RetryPolicy::DEFAULT_SERVER_ERROR_DELAYS_MS;

/// Default backoff ladder for 429 responses, in milliseconds.
pub const RATE_LIMIT_DELAYS_MS: [u64; 3] = RetryPolicy::DEFAULT_RATE_LIMIT_DELAYS_MS;

/// Upper bound for a single backoff delay (10 minutes).
pub const MAX_DELAY_MS: u64 = 600_000;

/// Output file name used by `init` when none is given.
pub const INIT_OUTPUT: &str = "pd-notify.toml";

/// Application directory under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "pd-notify";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the config file looked up when `--config` is not given.
///
/// `None` when the platform has no config directory.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
