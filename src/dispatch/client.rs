//! Production HTTP client implementation using reqwest.

use super::{EndpointConfig, HttpClient, HttpError, HttpRequest, HttpResponse, ProxyAddress};

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` that implements [`HttpClient`].
/// The wrapped client pools connections, so one instance should be shared
/// by every dispatch.
///
/// # Example
///
/// ```no_run
/// use pd_notify::dispatch::{ReqwestClient, HttpClient, HttpRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://events.pagerduty.com/v2/enqueue")?;
/// let request = HttpRequest::json_post(url, b"{}".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a client that sends every request through `proxy`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the proxy address is not a
    /// usable URL or the client cannot be initialized.
    pub fn with_proxy(proxy: &ProxyAddress) -> Result<Self, HttpError> {
        let proxy = reqwest::Proxy::all(proxy.to_url_string())
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;
        let inner = reqwest::Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Creates the client matching an endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the configured proxy is unusable.
    pub fn for_endpoints(config: &EndpointConfig) -> Result<Self, HttpError> {
        match &config.proxy {
            Some(proxy) => Self::with_proxy(proxy),
            None => Ok(Self::new()),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, TLS, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
