//! Error types for transport and dispatch failures.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes why an exchange could not be completed. The dispatcher never
/// retries these; they surface to the caller wrapped in [`NotifyError`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// proxy failures and bodies cut off mid-read.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying client could not be built (for example a bad proxy).
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Error returned by [`Notifier::notify`](super::Notifier::notify).
///
/// Only failures to complete the exchange end up here. Every HTTP status,
/// including 4xx and 5xx after exhausted retries, is reported as an
/// [`EventResult`](super::EventResult) instead.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The HTTP exchange could not be completed.
    #[error("Failed to deliver event: {0}")]
    Transport(#[from] HttpError),

    /// The event could not be serialized into a request body.
    #[error("Failed to serialize event: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A response body that must be JSON could not be parsed.
    #[error("Invalid JSON in {status} response: {source}")]
    InvalidResponse {
        /// Status of the response carrying the bad body
        status: http::StatusCode,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

impl NotifyError {
    /// Returns true if the failure happened on the wire rather than in
    /// (de)serialization.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
