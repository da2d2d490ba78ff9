//! Sleep abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait that allows injecting instant
//! or recording sleepers in tests while using real tokio timers in production.

use std::time::Duration;

/// How a requested sleep ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepOutcome {
    /// The full delay elapsed.
    Completed,
    /// The sleep was cut short before the delay elapsed.
    Interrupted,
}

impl SleepOutcome {
    /// Returns true if the sleep was cut short.
    #[must_use]
    pub const fn is_interrupted(self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

/// Abstraction over waiting for a duration.
///
/// The dispatcher uses this between retry attempts. Implementations must
/// not block the calling thread; the delay is a suspension point.
///
/// # Example
///
/// ```
/// use pd_notify::time::{InstantSleeper, SleepOutcome, Sleeper};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let outcome = InstantSleeper.sleep(Duration::from_secs(55)).await;
/// assert_eq!(outcome, SleepOutcome::Completed);
/// # }
/// ```
pub trait Sleeper: Send + Sync {
    /// Waits for `duration` and reports whether the wait completed.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = SleepOutcome> + Send;
}

/// Production sleeper backed by [`tokio::time::sleep`].
///
/// Tokio timers cannot be interrupted from outside; dropping the future is
/// the only way to stop one, so this always reports [`SleepOutcome::Completed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) -> SleepOutcome {
        tokio::time::sleep(duration).await;
        SleepOutcome::Completed
    }
}

/// Sleeper that returns immediately.
///
/// Useful in tests and for tooling that wants retries without waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) -> SleepOutcome {
        SleepOutcome::Completed
    }
}

impl<S: Sleeper> Sleeper for std::sync::Arc<S> {
    async fn sleep(&self, duration: Duration) -> SleepOutcome {
        (**self).sleep(duration).await
    }
}
