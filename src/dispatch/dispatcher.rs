//! Event notifier trait and the retrying HTTP dispatcher.

use http::StatusCode;
use serde_json::Value;

use crate::event::Event;
use crate::json::{array_value, property_value};
use crate::time::{Sleeper, TokioSleeper};

use super::{
    EndpointConfig, EventResult, HttpClient, HttpRequest, HttpResponse, NotifyError,
    ResponseClass, RetryPolicy,
};

/// Trait for delivering events to the incident-management API.
///
/// Implementations retry internally as they see fit; callers only observe
/// the final outcome.
pub trait Notifier: Send + Sync {
    /// Delivers `event` and reports what the API answered.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] when the exchange itself fails. API-level
    /// rejections are returned as [`EventResult::Error`].
    fn notify<E: Event>(
        &self,
        event: &E,
    ) -> impl std::future::Future<Output = Result<EventResult, NotifyError>> + Send;
}

/// What one attempt decided.
enum Step {
    Done(EventResult),
    Retry(StatusCode),
}

/// HTTP dispatcher with per-status retry ladders.
///
/// Sends each event to the endpoint matching its kind and classifies the
/// response. When retries are enabled, 429 and 500 responses (or whatever
/// statuses the [`RetryPolicy`] lists) are retried after the ladder delay
/// for that status.
///
/// The retry counter is shared by the whole call. If a retry answers with
/// a different retryable status, the next delay comes from that status's
/// ladder at the current count, so fewer retries remain.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `S`: The sleeper used between retries (defaults to [`TokioSleeper`])
///
/// # Example
///
/// ```
/// use pd_notify::dispatch::{Dispatcher, EndpointConfig, ReqwestClient};
///
/// let dispatcher = Dispatcher::new(
///     ReqwestClient::new(),
///     EndpointConfig::default().with_retries(true),
/// );
/// assert!(dispatcher.endpoints().retries_enabled);
/// ```
#[derive(Debug)]
pub struct Dispatcher<H, S = TokioSleeper> {
    client: H,
    sleeper: S,
    endpoints: EndpointConfig,
    retry_policy: RetryPolicy,
}

impl<H> Dispatcher<H, TokioSleeper> {
    /// Creates a dispatcher with the default retry ladders and
    /// [`TokioSleeper`] for delays.
    #[must_use]
    pub fn new(client: H, endpoints: EndpointConfig) -> Self {
        Self {
            client,
            sleeper: TokioSleeper,
            endpoints,
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl<H, S> Dispatcher<H, S> {
    /// Sets a custom sleeper for retry delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Dispatcher<H, S2> {
        Dispatcher {
            client: self.client,
            sleeper,
            endpoints: self.endpoints,
            retry_policy: self.retry_policy,
        }
    }

    /// Sets the retry ladders.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Returns the endpoint configuration.
    #[must_use]
    pub const fn endpoints(&self) -> &EndpointConfig {
        &self.endpoints
    }

    /// Returns the retry ladders.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }
}

impl<H: HttpClient, S: Sleeper> Dispatcher<H, S> {
    /// Turns one response into a final result or a retry request.
    fn evaluate(&self, response: &HttpResponse) -> Result<Step, NotifyError> {
        let status = response.status;

        let step = match ResponseClass::of(status, &self.retry_policy) {
            ResponseClass::Success => {
                let json = parse_body(response)?;
                Step::Done(EventResult::success(
                    property_value(&json, "status"),
                    property_value(&json, "message"),
                    property_value(&json, "dedup_key"),
                ))
            }
            ResponseClass::BadRequest => {
                let json = parse_body(response)?;
                Step::Done(EventResult::error(
                    property_value(&json, "status"),
                    property_value(&json, "message"),
                    array_value(&json, "errors"),
                ))
            }
            ResponseClass::Retryable if self.endpoints.retries_enabled => Step::Retry(status),
            ResponseClass::Retryable | ResponseClass::Other => {
                Step::Done(EventResult::status_error(status, response.body_lossy()))
            }
        };

        Ok(step)
    }

    async fn dispatch<E: Event>(&self, event: &E) -> Result<EventResult, NotifyError> {
        let url = self.endpoints.endpoint_for(event.kind()).clone();
        let body = serde_json::to_vec(event).map_err(NotifyError::Serialize)?;
        let request = HttpRequest::json_post(url, body);

        let mut retry_count = 0;

        loop {
            let response = self.client.request(request.clone()).await?;
            tracing::debug!(status = %response.status, body = %response.body_lossy(), "Events API response");

            let status = match self.evaluate(&response)? {
                Step::Done(result) => return Ok(result),
                Step::Retry(status) => status,
            };

            let json = parse_body(&response)?;
            let Some(delay) = self.retry_policy.delay(status, retry_count) else {
                tracing::debug!(
                    "Received a {status} response. Exhausted all the possibilities to retry."
                );
                let body = serde_json::to_string(&json).map_err(NotifyError::Serialize)?;
                return Ok(EventResult::status_error(status, body));
            };

            let max_retries = self.retry_policy.ladder(status).map_or(0, <[_]>::len);
            tracing::debug!(
                "Received a {status} response. Will retry again. ({retry_count}/{max_retries})"
            );

            if self.sleeper.sleep(delay).await.is_interrupted() {
                // Interruption cuts the wait short but does not cancel the retry.
                tracing::warn!("Backoff before retry {} was interrupted", retry_count + 1);
            }

            retry_count += 1;
        }
    }
}

impl<H: HttpClient, S: Sleeper> Notifier for Dispatcher<H, S> {
    async fn notify<E: Event>(&self, event: &E) -> Result<EventResult, NotifyError> {
        self.dispatch(event).await
    }
}

fn parse_body(response: &HttpResponse) -> Result<Value, NotifyError> {
    response
        .json::<Value>()
        .map_err(|source| NotifyError::InvalidResponse {
            status: response.status,
            source,
        })
}
