//! pd-notify: PagerDuty Events API client
//!
//! A library for sending alert and change events to an incident-management
//! Events API, with bounded retries on rate limiting and server errors.

pub mod config;
pub mod dispatch;
pub mod event;
pub mod json;
pub mod time;
