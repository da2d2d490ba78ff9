//! Dispatch layer for delivering events to the Events API.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Endpoint and proxy settings ([`EndpointConfig`], [`ProxyAddress`])
//! - Status classification ([`ResponseClass`]) and retry ladders ([`RetryPolicy`])
//! - Event delivery with retries ([`Notifier`], [`Dispatcher`])

mod classify;
mod client;
mod dispatcher;
mod endpoint;
mod error;
mod http;
mod result;
mod retry;

#[cfg(test)]
mod http_tests;
#[cfg(test)]
mod retry_tests;

pub use classify::ResponseClass;
pub use client::ReqwestClient;
pub use dispatcher::{Dispatcher, Notifier};
pub use endpoint::{DEFAULT_ALERT_ENDPOINT, DEFAULT_CHANGE_ENDPOINT, EndpointConfig, ProxyAddress};
pub use error::{HttpError, NotifyError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use result::EventResult;
pub use retry::RetryPolicy;
