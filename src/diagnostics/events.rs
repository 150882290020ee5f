// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the banner lifecycle.
//!
//! This module defines the events the coordinator reports while it shows,
//! queues, replaces and dismisses banners.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::banner::BannerKind;
use crate::domain::gesture::ExitReason;

/// Why a show request never reached the screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// The host screen was gone.
    HostUnavailable,
    /// The surface could not be created or shown.
    SurfaceFailed,
    /// The queue was cleared or the coordinator shut down.
    Cleared,
}

/// Caller-supplied callback slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallbackKind {
    Click,
    Dismiss,
    ShowComplete,
    DismissComplete,
    Submit,
}

/// Lifecycle events of banners.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BannerEvent {
    /// A banner started its entrance.
    Shown { id: u64, kind: BannerKind },

    /// A request was put in the pending queue.
    Queued { id: u64, queue_len: usize },

    /// A queued request was pushed out by a newer one.
    Evicted { id: u64 },

    /// The current banner was superseded.
    Replaced { id: u64, by: u64 },

    /// A banner finished its exit.
    Dismissed { id: u64, reason: ExitReason },

    /// A request was discarded.
    Dropped { id: u64, reason: DropReason },

    /// A callback panicked.
    CallbackFailed { id: u64, callback: CallbackKind },
}

/// A lifecycle event with the time it occurred.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: BannerEvent,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: BannerEvent) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// A diagnostic event that can be serialized to JSON.
///
/// Timestamps are converted to milliseconds since collection started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: BannerEvent,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(event: &DiagnosticEvent, collection_start: Instant) -> Self {
        let timestamp_ms = event
            .timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;
        Self {
            timestamp_ms,
            kind: event.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_tag() {
        let event = BannerEvent::Dismissed {
            id: 7,
            reason: ExitReason::Swipe,
        };
        let json = serde_json::to_string(&event).expect("serialize");
        assert_eq!(json, r#"{"event":"dismissed","id":7,"reason":"swipe"}"#);
    }

    #[test]
    fn serializable_event_flattens_kind() {
        let start = Instant::now();
        let event = DiagnosticEvent::new(BannerEvent::Evicted { id: 3 });
        let json =
            serde_json::to_value(SerializableEvent::new(&event, start)).expect("serialize");
        assert_eq!(json["event"], "evicted");
        assert_eq!(json["id"], 3);
        assert!(json["timestamp_ms"].is_u64());
    }
}
