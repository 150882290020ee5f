// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording the banner lifecycle.
//!
//! The coordinator reports what it does with each request (shown, queued,
//! evicted, replaced, dismissed, dropped) to an optional
//! [`DiagnosticsHandle`]. A [`DiagnosticsCollector`] stores the events in a
//! memory-bounded buffer and exports them as JSON.
//!
//! # Architecture
//!
//! - [`BannerEvent`]: Serializable lifecycle events
//! - [`DiagnosticsHandle`]: Cloneable, non-blocking sender
//! - [`DiagnosticsCollector`]: Rotating buffer and JSON export

mod collector;
mod events;

pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{BannerEvent, CallbackKind, DiagnosticEvent, DropReason, SerializableEvent};
