//! Outcome of a dispatched event.

use serde::Serialize;

/// What the Events API said about an event.
///
/// Fields mirror the response body and are `None` when the API left them
/// out. For statuses without a structured body, `status` holds the numeric
/// code, `message` is empty and `errors` carries the raw body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventResult {
    /// The event was accepted.
    Success {
        /// `status` field of the response
        status: Option<String>,
        /// `message` field of the response
        message: Option<String>,
        /// Key the API uses to group related events
        dedup_key: Option<String>,
    },
    /// The event was rejected or could not be delivered after retries.
    Error {
        /// `status` field of the response, or the HTTP status code
        status: Option<String>,
        /// `message` field of the response
        message: Option<String>,
        /// Error list or raw response body
        errors: Option<String>,
    },
}

impl EventResult {
    /// Creates a success result.
    #[must_use]
    pub const fn success(
        status: Option<String>,
        message: Option<String>,
        dedup_key: Option<String>,
    ) -> Self {
        Self::Success {
            status,
            message,
            dedup_key,
        }
    }

    /// Creates an error result.
    #[must_use]
    pub const fn error(
        status: Option<String>,
        message: Option<String>,
        errors: Option<String>,
    ) -> Self {
        Self::Error {
            status,
            message,
            errors,
        }
    }

    /// Creates an error result for a bare HTTP status and body.
    #[must_use]
    pub fn status_error(status: http::StatusCode, body: impl Into<String>) -> Self {
        Self::error(
            Some(status.as_u16().to_string()),
            Some(String::new()),
            Some(body.into()),
        )
    }

    /// Returns true for [`EventResult::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the status field.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::Success { status, .. } | Self::Error { status, .. } => status.as_deref(),
        }
    }

    /// Returns the message field.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message, .. } | Self::Error { message, .. } => message.as_deref(),
        }
    }

    /// Returns the dedup key of a success.
    #[must_use]
    pub fn dedup_key(&self) -> Option<&str> {
        match self {
            Self::Success { dedup_key, .. } => dedup_key.as_deref(),
            Self::Error { .. } => None,
        }
    }

    /// Returns the error detail of an error.
    #[must_use]
    pub fn errors(&self) -> Option<&str> {
        match self {
            Self::Error { errors, .. } => errors.as_deref(),
            Self::Success { .. } => None,
        }
    }
}
