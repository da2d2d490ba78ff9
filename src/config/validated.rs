//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use http::StatusCode;
use url::Url;

use crate::dispatch::{EndpointConfig, ProxyAddress, RetryPolicy};
use crate::event::EventKind;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Where the event payload is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    /// Read the payload from standard input
    Stdin,
    /// Read the payload from a file
    File(PathBuf),
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Endpoints, retry flag and proxy
    pub endpoints: EndpointConfig,

    /// Backoff ladders for retryable statuses
    pub retry_policy: RetryPolicy,

    /// Source of the event payload (required)
    pub event: EventSource,

    /// Kind the payload is routed as
    pub event_kind: EventKind,

    /// Dry-run mode (log the request without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ladders = self
            .retry_policy
            .iter()
            .map(|(status, ladder)| {
                let delays: Vec<String> = ladder
                    .iter()
                    .map(|d| d.as_millis().to_string())
                    .collect();
                format!("{status}=[{}]", delays.join(","))
            })
            .collect::<Vec<_>>()
            .join(" ");

        write!(
            f,
            "Config {{ {}, ladders(ms): {}, event: {} ({}), dry_run: {} }}",
            self.endpoints, ladders, self.event, self.event_kind, self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The event source is missing
    /// - An endpoint URL is invalid
    /// - Proxy host and port are not given together, or the port is 0
    /// - A retry delay exceeds the maximum
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let event = Self::resolve_event(cli)?;

        let alert_endpoint = Self::resolve_endpoint(
            field::ALERT_ENDPOINT,
            cli.alert_endpoint.as_deref(),
            toml.and_then(|t| t.endpoints.alert.as_deref()),
            defaults::ALERT_ENDPOINT,
        )?;

        let change_endpoint = Self::resolve_endpoint(
            field::CHANGE_ENDPOINT,
            cli.change_endpoint.as_deref(),
            toml.and_then(|t| t.endpoints.change.as_deref()),
            defaults::CHANGE_ENDPOINT,
        )?;

        // Flags only enable, never disable
        let retries_enabled =
            cli.retry || toml.is_some_and(|t| t.retry.enabled) || defaults::RETRIES_ENABLED;

        let mut endpoints =
            EndpointConfig::new(alert_endpoint, change_endpoint).with_retries(retries_enabled);
        if let Some(proxy) = Self::resolve_proxy(cli, toml)? {
            endpoints = endpoints.with_proxy(proxy);
        }

        let retry_policy = Self::build_retry_policy(toml)?;

        let event_kind = if cli.change {
            EventKind::Change
        } else {
            EventKind::Alert
        };

        Ok(Self {
            endpoints,
            retry_policy,
            event,
            event_kind,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path. Otherwise
    /// the per-user config file is used when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_fallback(cli, defaults::config_file().as_deref())
    }

    /// Like [`ValidatedConfig::load`], with an explicit fallback config path.
    ///
    /// # Errors
    ///
    /// Same as [`ValidatedConfig::load`].
    pub fn load_with_fallback(cli: &Cli, fallback: Option<&Path>) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else if let Some(path) = fallback.filter(|p| p.is_file()) {
            tracing::debug!("Using config file {}", path.display());
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_event(cli: &Cli) -> Result<EventSource, ConfigError> {
        let path = cli.event.as_ref().ok_or_else(|| {
            ConfigError::missing(field::EVENT, "Use --event <PATH> or --event - for stdin")
        })?;

        if path.as_os_str() == "-" {
            Ok(EventSource::Stdin)
        } else {
            Ok(EventSource::File(path.clone()))
        }
    }

    fn resolve_endpoint(
        name: &'static str,
        cli: Option<&str>,
        toml: Option<&str>,
        default: &str,
    ) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli.or(toml).unwrap_or(default);

        let invalid = |reason: String| ConfigError::InvalidUrl {
            field: name,
            url: url_str.to_string(),
            reason,
        };

        let url = Url::parse(url_str).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "unsupported scheme '{}', expected http or https",
                url.scheme()
            )));
        }

        Ok(url)
    }

    fn resolve_proxy(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<ProxyAddress>, ConfigError> {
        // Host and port are taken as a pair from the same source
        let (host, port) = if cli.proxy_host.is_some() || cli.proxy_port.is_some() {
            (cli.proxy_host.as_deref(), cli.proxy_port)
        } else {
            let section = toml.map(|t| &t.proxy);
            (
                section.and_then(|p| p.host.as_deref()),
                section.and_then(|p| p.port),
            )
        };

        match (host, port) {
            (None, None) => Ok(None),
            (Some(host), Some(port)) => {
                if host.trim().is_empty() {
                    return Err(ConfigError::InvalidProxy("host must not be empty".into()));
                }
                if port == 0 {
                    return Err(ConfigError::InvalidProxy("port must be greater than 0".into()));
                }
                Ok(Some(ProxyAddress::new(host.trim(), port)))
            }
            (Some(_), None) => Err(ConfigError::InvalidProxy(
                "proxy host given without a port".into(),
            )),
            (None, Some(_)) => Err(ConfigError::InvalidProxy(
                "proxy port given without a host".into(),
            )),
        }
    }

    fn build_retry_policy(toml: Option<&TomlConfig>) -> Result<RetryPolicy, ConfigError> {
        let retry = toml.map(|t| &t.retry);

        let server_error = retry
            .and_then(|r| r.server_error_delays_ms.clone())
            .unwrap_or_else(|| defaults::SERVER_ERROR_DELAYS_MS.to_vec());

        let rate_limit = retry
            .and_then(|r| r.rate_limit_delays_ms.clone())
            .unwrap_or_else(|| defaults::RATE_LIMIT_DELAYS_MS.to_vec());

        Ok(RetryPolicy::empty()
            .with_ladder(
                StatusCode::INTERNAL_SERVER_ERROR,
                parse_ladder("server_error_delays_ms", &server_error)?,
            )
            .with_ladder(
                StatusCode::TOO_MANY_REQUESTS,
                parse_ladder("rate_limit_delays_ms", &rate_limit)?,
            ))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_ladder(name: &str, delays_ms: &[u64]) -> Result<Vec<Duration>, ConfigError> {
    delays_ms
        .iter()
        .map(|&ms| {
            if ms > defaults::MAX_DELAY_MS {
                return Err(ConfigError::InvalidRetry(format!(
                    "{name} entry {ms}ms exceeds the maximum of {}ms",
                    defaults::MAX_DELAY_MS
                )));
            }
            Ok(Duration::from_millis(ms))
        })
        .collect()
}
