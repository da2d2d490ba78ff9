//! Tests for CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::parse_from_iter(["pd-notify", "--event", "event.json"]);

        assert_eq!(cli.event, Some(PathBuf::from("event.json")));
        assert!(!cli.change);
        assert!(!cli.retry);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_short_event_flag_with_stdin() {
        let cli = Cli::parse_from_iter(["pd-notify", "-e", "-"]);
        assert_eq!(cli.event, Some(PathBuf::from("-")));
    }

    #[test]
    fn parse_endpoint_options() {
        let cli = Cli::parse_from_iter([
            "pd-notify",
            "--alert-endpoint",
            "https://events.example.com/alert",
            "--change-endpoint",
            "https://events.example.com/change",
        ]);

        assert_eq!(
            cli.alert_endpoint.as_deref(),
            Some("https://events.example.com/alert")
        );
        assert_eq!(
            cli.change_endpoint.as_deref(),
            Some("https://events.example.com/change")
        );
    }

    #[test]
    fn parse_proxy_options() {
        let cli = Cli::parse_from_iter([
            "pd-notify",
            "--proxy-host",
            "localhost",
            "--proxy-port",
            "8080",
        ]);

        assert_eq!(cli.proxy_host.as_deref(), Some("localhost"));
        assert_eq!(cli.proxy_port, Some(8080));
    }

    #[test]
    fn proxy_port_out_of_range_is_rejected() {
        let result = Cli::try_parse_from(["pd-notify", "--proxy-port", "70000"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::parse_from_iter([
            "pd-notify",
            "--change",
            "--retry",
            "--dry-run",
            "--verbose",
        ]);

        assert!(cli.change);
        assert!(cli.retry);
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from_iter(["pd-notify", "-c", "/etc/pd-notify.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/pd-notify.toml")));
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["pd-notify", "init"]);

        assert!(cli.is_init());
        assert!(matches!(
            cli.command,
            Some(Command::Init { ref output }) if output == &PathBuf::from("pd-notify.toml")
        ));
    }

    #[test]
    fn init_with_custom_output() {
        let cli = Cli::parse_from_iter(["pd-notify", "init", "--output", "custom.toml"]);

        assert!(matches!(
            cli.command,
            Some(Command::Init { ref output }) if output == &PathBuf::from("custom.toml")
        ));
    }

    #[test]
    fn send_mode_is_not_init() {
        let cli = Cli::parse_from_iter(["pd-notify", "--event", "e.json"]);
        assert!(!cli.is_init());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["pd-notify", "--bogus"]).is_err());
    }
}
