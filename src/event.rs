//! Events accepted by the dispatcher.
//!
//! The payload itself is opaque here: anything serializable can be sent.
//! The only property the dispatcher looks at is the [`EventKind`], which
//! selects the target endpoint.

use serde::{Serialize, Serializer};

/// Which family an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventKind {
    /// A trigger, acknowledge or resolve event for an incident.
    #[default]
    Alert,
    /// A deployment or other change notification.
    Change,
}

impl EventKind {
    /// Returns true for change events.
    #[must_use]
    pub const fn is_change(self) -> bool {
        matches!(self, Self::Change)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alert => write!(f, "alert"),
            Self::Change => write!(f, "change"),
        }
    }
}

/// An event that can be delivered by a [`Notifier`](crate::dispatch::Notifier).
///
/// # Example
///
/// ```
/// use pd_notify::event::{Event, EventKind};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Deploy {
///     routing_key: String,
///     payload: serde_json::Value,
/// }
///
/// impl Event for Deploy {
///     fn kind(&self) -> EventKind {
///         EventKind::Change
///     }
/// }
/// ```
pub trait Event: Serialize + Send + Sync {
    /// Returns the event family, used to pick the endpoint.
    fn kind(&self) -> EventKind;
}

/// A pre-built JSON payload tagged with its kind.
///
/// Serializes as the payload alone; the kind never reaches the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    kind: EventKind,
    payload: serde_json::Value,
}

impl RawEvent {
    /// Wraps a payload to be routed as an alert event.
    #[must_use]
    pub const fn alert(payload: serde_json::Value) -> Self {
        Self {
            kind: EventKind::Alert,
            payload,
        }
    }

    /// Wraps a payload to be routed as a change event.
    #[must_use]
    pub const fn change(payload: serde_json::Value) -> Self {
        Self {
            kind: EventKind::Change,
            payload,
        }
    }

    /// Wraps a payload with an explicit kind.
    #[must_use]
    pub const fn new(kind: EventKind, payload: serde_json::Value) -> Self {
        Self { kind, payload }
    }

    /// Returns the wrapped payload.
    #[must_use]
    pub const fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}

impl Serialize for RawEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload.serialize(serializer)
    }
}

impl Event for RawEvent {
    fn kind(&self) -> EventKind {
        self.kind
    }
}

impl<E: Event> Event for &E {
    fn kind(&self) -> EventKind {
        (**self).kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_event_serializes_payload_only() {
        let event = RawEvent::change(json!({"routing_key": "abc", "payload": {"summary": "deploy"}}));
        let text = serde_json::to_string(&event).unwrap();

        assert_eq!(
            text,
            r#"{"payload":{"summary":"deploy"},"routing_key":"abc"}"#
        );
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(RawEvent::alert(json!({})).kind(), EventKind::Alert);
        assert_eq!(RawEvent::change(json!({})).kind(), EventKind::Change);
        assert_eq!(
            RawEvent::new(EventKind::Change, json!(null)).kind(),
            EventKind::Change
        );
    }

    #[test]
    fn default_kind_is_alert() {
        assert_eq!(EventKind::default(), EventKind::Alert);
        assert!(!EventKind::Alert.is_change());
        assert!(EventKind::Change.is_change());
    }

    #[test]
    fn kind_displays_lowercase() {
        assert_eq!(EventKind::Alert.to_string(), "alert");
        assert_eq!(EventKind::Change.to_string(), "change");
    }

    #[test]
    fn reference_forwards_kind() {
        let event = RawEvent::change(json!({}));
        assert_eq!((&event).kind(), EventKind::Change);
    }
}
