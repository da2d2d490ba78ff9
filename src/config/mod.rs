//! Configuration layer for pd-notify.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - `--config`, or the per-user file when it exists
//! 3. **Built-in defaults** - The public Events API endpoints, retries off
//!
//! Proxy host and port are resolved as a pair: if either is given on the
//! command line, both come from the command line.
//!
//! # Boolean Flag Semantics
//!
//! `--retry` uses OR semantics with `retry.enabled`: once enabled in the
//! TOML file, the command line cannot disable it.
//!
//! # TOML-Only Options
//!
//! The retry ladders (`retry.server_error_delays_ms`,
//! `retry.rate_limit_delays_ms`) can only be changed in a config file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{EventSource, ValidatedConfig, write_default_config};
