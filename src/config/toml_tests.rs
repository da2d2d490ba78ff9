//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.endpoints.alert.is_none());
        assert!(config.endpoints.change.is_none());
        assert!(!config.retry.enabled);
        assert!(config.proxy.host.is_none());
    }

    #[test]
    fn parse_endpoints_section() {
        let toml = r#"
            [endpoints]
            alert = "https://events.example.com/v2/enqueue"
            change = "https://events.example.com/v2/change/enqueue"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(
            config.endpoints.alert.as_deref(),
            Some("https://events.example.com/v2/enqueue")
        );
        assert_eq!(
            config.endpoints.change.as_deref(),
            Some("https://events.example.com/v2/change/enqueue")
        );
    }

    #[test]
    fn parse_retry_section() {
        let toml = r"
            [retry]
            enabled = true
            server_error_delays_ms = [100, 200]
            rate_limit_delays_ms = []
        ";

        let config = TomlConfig::parse(toml).unwrap();
        assert!(config.retry.enabled);
        assert_eq!(config.retry.server_error_delays_ms, Some(vec![100, 200]));
        assert_eq!(config.retry.rate_limit_delays_ms, Some(vec![]));
    }

    #[test]
    fn parse_proxy_section() {
        let toml = r#"
            [proxy]
            host = "proxy.internal"
            port = 3128
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.proxy.host.as_deref(), Some("proxy.internal"));
        assert_eq!(config.proxy.port, Some(3128));
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [endpoints]
            alert = "https://events.example.com"
            unknown = "value"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(TomlConfig::parse("[alerts]\nurl = \"x\"").is_err());
    }

    #[test]
    fn negative_delay_is_rejected() {
        assert!(TomlConfig::parse("[retry]\nserver_error_delays_ms = [-1]").is_err());
    }

    #[test]
    fn port_out_of_range_is_rejected() {
        assert!(TomlConfig::parse("[proxy]\nhost = \"h\"\nport = 65536").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(TomlConfig::parse("[retry]\nenabled = \"yes\"").is_err());
    }
}

mod loading {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[retry]\nenabled = true").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();
        assert!(config.retry.enabled);
    }

    #[test]
    fn load_missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TomlConfig::load(&dir.path().join("missing.toml"));

        assert!(matches!(
            result,
            Err(super::super::ConfigError::FileRead { .. })
        ));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(!config.retry.enabled);
        assert!(config.endpoints.alert.is_none());
    }

    #[test]
    fn default_template_documents_every_section() {
        let template = default_config_template();

        assert!(template.contains("[endpoints]"));
        assert!(template.contains("[retry]"));
        assert!(template.contains("[proxy]"));
        assert!(template.contains("server_error_delays_ms"));
        assert!(template.contains("rate_limit_delays_ms"));
    }
}
