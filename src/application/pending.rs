// SPDX-License-Identifier: MPL-2.0
//! Cross-screen pending banner handoff.
//!
//! A screen that is about to go away (a form that saves and closes) parks a
//! banner here; the next screen shows it once it is up. The slot holds at
//! most one banner: the last scheduled one wins.
//!
//! The slot is `Send + Sync` and may be filled from any thread. Consuming it
//! happens on the UI thread, where the coordinator lives.

use crate::application::builder::PendingBuilder;
use crate::application::coordinator::Coordinator;
use crate::application::port::Host;
use crate::domain::banner::BannerDescriptor;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A parked banner and the screen that parked it.
#[derive(Debug, Clone)]
pub struct PendingBanner {
    pub descriptor: BannerDescriptor,
    /// Label of the scheduling screen, for logs.
    pub origin: String,
}

/// Single-slot, thread-safe banner storage.
#[derive(Debug, Default)]
pub struct PendingSlot {
    inner: Mutex<Option<PendingBanner>>,
}

impl PendingSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a pending banner that will land in this slot.
    #[must_use]
    pub fn builder(self: &Arc<Self>, origin: impl Into<String>) -> PendingBuilder {
        PendingBuilder::new(Arc::clone(self), origin)
    }

    // A panic while holding the lock cannot leave the Option half-written.
    fn lock(&self) -> MutexGuard<'_, Option<PendingBanner>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `banner`, returning the one it replaced.
    pub fn store(&self, banner: PendingBanner) -> Option<PendingBanner> {
        let origin = banner.origin.clone();
        let replaced = self.lock().replace(banner);
        if let Some(previous) = &replaced {
            tracing::debug!(
                origin = %origin,
                replaced = %previous.origin,
                "pending banner overwritten"
            );
        }
        replaced
    }

    /// Removes and returns the parked banner.
    pub fn take(&self) -> Option<PendingBanner> {
        self.lock().take()
    }

    /// Drops the parked banner. Returns whether there was one.
    pub fn clear(&self) -> bool {
        self.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.lock().is_some()
    }

    /// Origin label of the parked banner.
    #[must_use]
    pub fn origin(&self) -> Option<String> {
        self.lock().as_ref().map(|banner| banner.origin.clone())
    }

    /// Hands the parked banner, if any, to the coordinator.
    pub fn consume_if_available(&self, host: Rc<dyn Host>, coordinator: &mut Coordinator) -> bool {
        let Some(pending) = self.take() else {
            return false;
        };
        tracing::debug!(origin = %pending.origin, "showing pending banner");
        coordinator.request_show(host, pending.descriptor);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::builder::Configure;
    use crate::config::Settings;
    use crate::test_utils::RecordingHost;
    use std::thread;

    fn banner(origin: &str) -> PendingBanner {
        PendingBanner {
            descriptor: BannerDescriptor::default(),
            origin: origin.to_string(),
        }
    }

    #[test]
    fn last_write_wins() {
        let slot = PendingSlot::new();
        assert!(slot.store(banner("first")).is_none());
        let replaced = slot.store(banner("second")).expect("first was replaced");
        assert_eq!(replaced.origin, "first");
        assert_eq!(slot.origin().as_deref(), Some("second"));
    }

    #[test]
    fn clear_is_true_once() {
        let slot = PendingSlot::new();
        slot.store(banner("form"));
        assert!(slot.clear());
        assert!(!slot.clear());
    }

    #[test]
    fn consume_shows_and_empties() {
        let slot = Arc::new(PendingSlot::new());
        slot.builder("settings")
            .message("Saved")
            .schedule()
            .expect("has a message");

        let mut coordinator = Coordinator::new(Settings::default());
        let host: Rc<dyn Host> = Rc::new(RecordingHost::new());
        assert!(slot.consume_if_available(Rc::clone(&host), &mut coordinator));
        assert!(coordinator.current().is_some());
        assert!(!slot.consume_if_available(host, &mut coordinator));
    }

    #[test]
    fn concurrent_schedules_leave_exactly_one() {
        let slot = Arc::new(PendingSlot::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let slot = Arc::clone(&slot);
                thread::spawn(move || {
                    slot.builder(format!("worker-{i}"))
                        .message(format!("message {i}"))
                        .schedule()
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread").expect("scheduled");
        }

        let parked = slot.take().expect("one banner parked");
        assert!(parked.origin.starts_with("worker-"));
        assert!(slot.take().is_none());
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let slot = Arc::new(PendingSlot::new());
        let poisoner = Arc::clone(&slot);
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the slot");
        })
        .join();

        slot.store(banner("after"));
        assert!(slot.is_pending());
    }
}
