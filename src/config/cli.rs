//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// pd-notify: send alert and change events to the PagerDuty Events API
///
/// Reads a JSON event payload from a file or stdin, posts it to the
/// matching endpoint and prints the API's answer as JSON.
#[derive(Debug, Parser)]
#[command(name = "pd-notify")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the JSON event payload, or '-' for stdin (required for send mode)
    #[arg(long, short, value_name = "PATH")]
    pub event: Option<PathBuf>,

    /// Route the payload as a change event instead of an alert event
    #[arg(long)]
    pub change: bool,

    /// Endpoint for alert events
    #[arg(long = "alert-endpoint", value_name = "URL")]
    pub alert_endpoint: Option<String>,

    /// Endpoint for change events
    #[arg(long = "change-endpoint", value_name = "URL")]
    pub change_endpoint: Option<String>,

    /// Retry on 429 and 500 responses
    #[arg(long)]
    pub retry: bool,

    /// HTTP proxy host (requires --proxy-port)
    #[arg(long = "proxy-host")]
    pub proxy_host: Option<String>,

    /// HTTP proxy port (requires --proxy-host)
    #[arg(long = "proxy-port")]
    pub proxy_port: Option<u16>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Test mode - log the request without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for pd-notify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::INIT_OUTPUT)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
