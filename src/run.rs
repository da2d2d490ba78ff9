//! Application execution logic.
//!
//! This module reads the event payload, builds the dispatcher from the
//! validated configuration and delivers the event.

use thiserror::Error;
use tokio::io::AsyncReadExt;

use pd_notify::config::{EventSource, ValidatedConfig};
use pd_notify::dispatch::{
    Dispatcher, EventResult, HttpError, Notifier, NotifyError, ReqwestClient,
};
use pd_notify::event::{Event, EventKind, RawEvent};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to read the event payload.
    #[error("Failed to read event from {input}: {error}")]
    EventRead {
        /// Where the payload was read from
        input: EventSource,
        /// The underlying I/O error
        #[source]
        error: std::io::Error,
    },

    /// The event payload is not valid JSON.
    #[error("Event payload is not valid JSON: {0}")]
    EventParse(#[source] serde_json::Error),

    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] HttpError),

    /// The event could not be delivered.
    #[error("Failed to deliver event: {0}")]
    Notify(#[source] NotifyError),
}

/// Executes one delivery.
///
/// Returns `None` in dry-run mode, where nothing is sent.
///
/// # Errors
///
/// Returns an error if:
/// - The event cannot be read or is not JSON
/// - The proxy configuration cannot be turned into a client
/// - The exchange with the API fails
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires a real
/// network endpoint. Its pieces are tested individually.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<Option<EventResult>, RunError> {
    let event = read_event(&config.event, config.event_kind).await?;

    if config.dry_run {
        log_dry_run(&config, &event);
        return Ok(None);
    }

    let dispatcher = build_dispatcher(&config)?;
    deliver(&dispatcher, &event).await.map(Some)
}

/// Reads and parses the event payload.
async fn read_event(source: &EventSource, kind: EventKind) -> Result<RawEvent, RunError> {
    let read_error = |error| RunError::EventRead {
        input: source.clone(),
        error,
    };

    let bytes = match source {
        EventSource::Stdin => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .map_err(read_error)?;
            buf
        }
        EventSource::File(path) => tokio::fs::read(path).await.map_err(read_error)?,
    };

    let payload = serde_json::from_slice(&bytes).map_err(RunError::EventParse)?;
    Ok(RawEvent::new(kind, payload))
}

/// Creates the production dispatcher for the configured endpoints.
fn build_dispatcher(
    config: &ValidatedConfig,
) -> Result<Dispatcher<ReqwestClient>, RunError> {
    let client = ReqwestClient::for_endpoints(&config.endpoints).map_err(RunError::ClientBuild)?;

    if let Some(ref proxy) = config.endpoints.proxy {
        tracing::debug!("Routing requests through proxy {proxy}");
    }

    Ok(Dispatcher::new(client, config.endpoints.clone())
        .with_retry_policy(config.retry_policy.clone()))
}

/// Sends `event` and logs the outcome.
async fn deliver<N: Notifier, E: Event>(notifier: &N, event: &E) -> Result<EventResult, RunError> {
    let kind = event.kind();
    let result = notifier.notify(event).await.map_err(RunError::Notify)?;

    if result.is_success() {
        tracing::info!(
            "Accepted {kind} event (dedup_key: {})",
            result.dedup_key().unwrap_or("none")
        );
    } else {
        tracing::warn!(
            "Rejected {kind} event with status {}: {}",
            result.status().unwrap_or("unknown"),
            result.message().unwrap_or("")
        );
    }

    Ok(result)
}

fn log_dry_run(config: &ValidatedConfig, event: &RawEvent) {
    let url = config.endpoints.endpoint_for(event.kind());
    tracing::info!(
        "Dry-run: would POST {} event to {url}: {}",
        event.kind(),
        event.payload()
    );
}
