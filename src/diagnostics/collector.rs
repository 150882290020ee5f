// SPDX-License-Identifier: MPL-2.0
//! Event log for banner lifecycles.
//!
//! The coordinator posts events through a [`DiagnosticsHandle`]; the
//! [`DiagnosticsCollector`] drains them into a rotating buffer that keeps the
//! newest entries and can dump them as JSON.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{BannerEvent, DiagnosticEvent, SerializableEvent};
use crate::config::DEFAULT_DIAGNOSTICS_CAPACITY;
use crate::domain::queue::RotatingQueue;

/// Events in flight between two drains.
const INBOX_CAPACITY: usize = 100;

/// Sending side of the event log, held by the coordinator.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    sender: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a lifecycle event. Never blocks; the event is lost when the
    /// inbox is full.
    pub fn log(&self, event: BannerEvent) {
        let _ = self.sender.try_send(DiagnosticEvent::new(event));
    }
}

/// Keeps the most recent banner events.
pub struct DiagnosticsCollector {
    events: RotatingQueue<DiagnosticEvent>,
    inbox: Receiver<DiagnosticEvent>,
    sender: Sender<DiagnosticEvent>,
    started: Instant,
    started_wall: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct DiagnosticReport {
    started_at: DateTime<Utc>,
    duration_ms: u64,
    event_count: usize,
    events: Vec<SerializableEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector keeping at most `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, inbox) = bounded(INBOX_CAPACITY);
        Self {
            events: RotatingQueue::with_raw_capacity(capacity),
            inbox,
            sender,
            started: Instant::now(),
            started_wall: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            sender: self.sender.clone(),
        }
    }

    /// Moves everything posted since the last call into the log. Hosts call
    /// this from their frame tick.
    pub fn process_pending(&mut self) {
        for event in self.inbox.try_iter() {
            self.events.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Logged events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &BannerEvent> {
        self.events.iter().map(|event| &event.kind)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Dumps the log as pretty-printed JSON with offsets relative to the
    /// collector's creation.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent> = self
            .events
            .iter()
            .map(|event| SerializableEvent::new(event, self.started))
            .collect();

        let elapsed = self.started.elapsed().as_millis();
        serde_json::to_string_pretty(&DiagnosticReport {
            started_at: self.started_wall,
            duration_ms: u64::try_from(elapsed).unwrap_or(u64::MAX),
            event_count: events.len(),
            events,
        })
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}
