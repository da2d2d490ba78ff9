//! Target endpoints and connection settings.

use std::fmt;
use std::net::Ipv6Addr;

use url::Url;

use crate::event::EventKind;

/// Default Events API endpoint for alert events.
pub const DEFAULT_ALERT_ENDPOINT: &str = "https://events.pagerduty.com/v2/enqueue";

/// Default Events API endpoint for change events.
pub const DEFAULT_CHANGE_ENDPOINT: &str = "https://events.pagerduty.com/v2/change/enqueue";

/// Address of an HTTP proxy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProxyAddress {
    /// Proxy host name or IP address
    pub host: String,
    /// Proxy port
    pub port: u16,
}

impl ProxyAddress {
    /// Creates a new proxy address.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the proxy as an `http://host:port` URL string.
    #[must_use]
    pub fn to_url_string(&self) -> String {
        format!("http://{self}")
    }
}

impl fmt::Display for ProxyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // IPv6 literals need brackets to stay separable from the port
        if self.host.parse::<Ipv6Addr>().is_ok() {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Where and how events are delivered.
///
/// Built once when the client is constructed and shared read-only by
/// every dispatch. Two configurations are equal when they target the
/// same endpoints with the same retry and proxy settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Endpoint for alert events
    pub alert_endpoint: Url,
    /// Endpoint for change events
    pub change_endpoint: Url,
    /// Whether 429 and 500 responses are retried
    pub retries_enabled: bool,
    /// Optional HTTP proxy
    pub proxy: Option<ProxyAddress>,
}

impl EndpointConfig {
    /// Creates a configuration for the given endpoints with retries
    /// disabled and no proxy.
    #[must_use]
    pub const fn new(alert_endpoint: Url, change_endpoint: Url) -> Self {
        Self {
            alert_endpoint,
            change_endpoint,
            retries_enabled: false,
            proxy: None,
        }
    }

    /// Enables or disables retries.
    #[must_use]
    pub const fn with_retries(mut self, enabled: bool) -> Self {
        self.retries_enabled = enabled;
        self
    }

    /// Routes traffic through a proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy: ProxyAddress) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Returns the endpoint an event of `kind` is sent to.
    #[must_use]
    pub const fn endpoint_for(&self, kind: EventKind) -> &Url {
        match kind {
            EventKind::Change => &self.change_endpoint,
            EventKind::Alert => &self.alert_endpoint,
        }
    }
}

impl Default for EndpointConfig {
    /// Targets the public Events API, retries disabled, no proxy.
    fn default() -> Self {
        let alert = Url::parse(DEFAULT_ALERT_ENDPOINT).expect("default alert endpoint is valid");
        let change =
            Url::parse(DEFAULT_CHANGE_ENDPOINT).expect("default change endpoint is valid");
        Self::new(alert, change)
    }
}

impl fmt::Display for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alert: {}, change: {}, retries: {}, proxy: ",
            self.alert_endpoint, self.change_endpoint, self.retries_enabled
        )?;
        match &self.proxy {
            Some(proxy) => write!(f, "{proxy}"),
            None => write!(f, "none"),
        }
    }
}
