//! Response status classification.

use http::StatusCode;

use super::RetryPolicy;

/// How the dispatcher treats a response status.
///
/// Every status maps to exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 200, 201 or 202: the event was accepted.
    Success,
    /// 400: the event was rejected as invalid.
    BadRequest,
    /// A status with a retry ladder (429 and 500 by default).
    Retryable,
    /// Anything else.
    Other,
}

impl ResponseClass {
    /// Classifies `status` against the ladders in `policy`.
    ///
    /// Success statuses and 400 win over any ladder registered for them.
    #[must_use]
    pub fn of(status: StatusCode, policy: &RetryPolicy) -> Self {
        match status {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Self::Success,
            StatusCode::BAD_REQUEST => Self::BadRequest,
            s if policy.is_retryable(s) => Self::Retryable,
            _ => Self::Other,
        }
    }
}
