//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Endpoint configuration section
    #[serde(default)]
    pub endpoints: EndpointsSection,

    /// Retry configuration section
    #[serde(default)]
    pub retry: RetrySection,

    /// Proxy configuration section
    #[serde(default)]
    pub proxy: ProxySection,
}

/// Endpoint configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointsSection {
    /// Endpoint for alert events
    pub alert: Option<String>,

    /// Endpoint for change events
    pub change: Option<String>,
}

/// Retry configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetrySection {
    /// Retry on 429 and 500 responses
    #[serde(default)]
    pub enabled: bool,

    /// Backoff ladder for 500 responses, in milliseconds
    pub server_error_delays_ms: Option<Vec<u64>>,

    /// Backoff ladder for 429 responses, in milliseconds
    pub rate_limit_delays_ms: Option<Vec<u64>>,
}

/// Proxy configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxySection {
    /// Proxy host
    pub host: Option<String>,

    /// Proxy port
    pub port: Option<u16>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# pd-notify Configuration File

[endpoints]
# Events API endpoint for alert events
# alert = "https://events.pagerduty.com/v2/enqueue"

# Events API endpoint for change events
# change = "https://events.pagerduty.com/v2/change/enqueue"

[retry]
# Retry on 429 (rate limited) and 500 (server error) responses
# Note: --retry on the command line also enables this
enabled = false

# Delays before each retry of a 500 response, in milliseconds
# The number of entries is the number of retries
# server_error_delays_ms = [500, 1000, 2000]

# Delays before each retry of a 429 response, in milliseconds
# rate_limit_delays_ms = [10000, 25000, 55000]

[proxy]
# HTTP proxy (host and port must be set together)
# host = "proxy.internal"
# port = 3128
"#
    .to_string()
}
