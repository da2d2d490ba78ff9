//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, error hints and result
//! printing that support the main entry point.

use pd_notify::config::{ConfigError, field};
use pd_notify::dispatch::EventResult;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing required fields, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - unreadable event, network failure, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// The API answered with an error result (exit code 3).
    pub fn rejected() -> ExitCode {
        ExitCode::from(3)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::EVENT => {
            eprintln!("\nPass the event payload with --event <PATH>, or --event - to read stdin.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'pd-notify init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Prints the API outcome to stdout as JSON.
pub fn print_result(result: &EventResult) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("Failed to render result: {e}"),
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout only carries the result.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
