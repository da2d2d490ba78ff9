//! Retry ladders keyed by response status.

use std::collections::BTreeMap;
use std::time::Duration;

use http::StatusCode;

/// Per-status backoff ladders.
///
/// Each retryable status owns an ordered list of delays; one entry is
/// consumed per retry, so the list length is also the retry budget for
/// that status. A status with no ladder is never retried.
///
/// # Defaults
///
/// - `500 Internal Server Error`: 500ms, 1s, 2s (ride out flapping)
/// - `429 Too Many Requests`: 10s, 25s, 55s (let the rate limit clear)
///
/// # Example
///
/// ```
/// use pd_notify::dispatch::RetryPolicy;
/// use http::StatusCode;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(
///     policy.delay(StatusCode::INTERNAL_SERVER_ERROR, 0),
///     Some(Duration::from_millis(500))
/// );
///
/// // Retry 503 as well, quickly
/// let custom = RetryPolicy::new()
///     .with_ladder(StatusCode::SERVICE_UNAVAILABLE, [Duration::from_millis(200)]);
/// assert!(custom.is_retryable(StatusCode::SERVICE_UNAVAILABLE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    ladders: BTreeMap<u16, Vec<Duration>>,
}

impl RetryPolicy {
    /// Default server error ladder in milliseconds.
    pub const DEFAULT_SERVER_ERROR_DELAYS_MS: [u64; 3] = [500, 1_000, 2_000];

    /// Default rate limit ladder in milliseconds.
    pub const DEFAULT_RATE_LIMIT_DELAYS_MS: [u64; 3] = [10_000, 25_000, 55_000];

    /// Creates a policy with the default 500 and 429 ladders.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with_ladder(
                StatusCode::INTERNAL_SERVER_ERROR,
                Self::DEFAULT_SERVER_ERROR_DELAYS_MS.map(Duration::from_millis),
            )
            .with_ladder(
                StatusCode::TOO_MANY_REQUESTS,
                Self::DEFAULT_RATE_LIMIT_DELAYS_MS.map(Duration::from_millis),
            )
    }

    /// Creates a policy that retries nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ladders: BTreeMap::new(),
        }
    }

    /// Sets the ladder for `status`, replacing any existing one.
    ///
    /// Success statuses and 400 are classified before the ladder table is
    /// consulted, so ladders registered for them are never used.
    #[must_use]
    pub fn with_ladder(
        mut self,
        status: StatusCode,
        delays: impl IntoIterator<Item = Duration>,
    ) -> Self {
        self.ladders
            .insert(status.as_u16(), delays.into_iter().collect());
        self
    }

    /// Returns the ladder for `status`, if it is retryable.
    #[must_use]
    pub fn ladder(&self, status: StatusCode) -> Option<&[Duration]> {
        self.ladders.get(&status.as_u16()).map(Vec::as_slice)
    }

    /// Returns true if `status` has a ladder.
    #[must_use]
    pub fn is_retryable(&self, status: StatusCode) -> bool {
        self.ladders.contains_key(&status.as_u16())
    }

    /// Returns the delay before retry number `retry` (0-indexed) for
    /// `status`, or `None` once that ladder is exhausted.
    #[must_use]
    pub fn delay(&self, status: StatusCode, retry: usize) -> Option<Duration> {
        self.ladder(status)
            .and_then(|ladder| ladder.get(retry).copied())
    }

    /// Iterates over `(status, ladder)` pairs in status order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &[Duration])> {
        self.ladders
            .iter()
            .map(|(status, ladder)| (*status, ladder.as_slice()))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
