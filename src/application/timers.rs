// SPDX-License-Identifier: MPL-2.0
//! Deadline timers owned by the coordinator.
//!
//! A timer is identified by what it is for. Scheduling a key that is already
//! armed moves its deadline, so a banner never has two auto-dismiss
//! countdowns running.

use crate::domain::banner::BannerId;
use std::collections::HashMap;
use std::time::Instant;

/// Purpose of a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Entrance transition of a banner ends.
    Entrance(BannerId),
    /// Auto-dismiss countdown of a banner runs out.
    AutoDismiss(BannerId),
    /// Exit transition of a banner ends.
    Exit(BannerId),
    /// Next attempt at serving the pending queue.
    ProcessQueue,
}

impl TimerKey {
    /// Banner the timer belongs to, if any.
    #[must_use]
    pub fn banner(self) -> Option<BannerId> {
        match self {
            TimerKey::Entrance(id) | TimerKey::AutoDismiss(id) | TimerKey::Exit(id) => Some(id),
            TimerKey::ProcessQueue => None,
        }
    }

    /// Tie-break among timers due at the same instant. Transitions of a
    /// banner settle before its countdown, and the queue is served last so
    /// it sees every banner that finished in the same tick.
    fn rank(self) -> (u8, u64) {
        match self {
            TimerKey::Entrance(id) => (0, id.value()),
            TimerKey::Exit(id) => (1, id.value()),
            TimerKey::AutoDismiss(id) => (2, id.value()),
            TimerKey::ProcessQueue => (3, 0),
        }
    }
}

/// Set of armed deadlines.
#[derive(Debug, Default)]
pub struct TimerSet {
    deadlines: HashMap<TimerKey, Instant>,
}

impl TimerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `key`, replacing any deadline it already had.
    pub fn schedule(&mut self, key: TimerKey, deadline: Instant) {
        self.deadlines.insert(key, deadline);
    }

    /// Disarms `key`. Returns whether it was armed.
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.deadlines.remove(&key).is_some()
    }

    /// Disarms every timer of a banner.
    pub fn cancel_banner(&mut self, id: BannerId) {
        self.deadlines.retain(|key, _| key.banner() != Some(id));
    }

    #[must_use]
    pub fn deadline(&self, key: TimerKey) -> Option<Instant> {
        self.deadlines.get(&key).copied()
    }

    #[must_use]
    pub fn is_armed(&self, key: TimerKey) -> bool {
        self.deadlines.contains_key(&key)
    }

    /// Earliest armed deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Disarms and returns every timer due at `now`, earliest first. Equal
    /// deadlines come out in a fixed order.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKey> {
        let mut due: Vec<(Instant, TimerKey)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(key, deadline)| (*deadline, *key))
            .collect();
        due.sort_by_key(|(deadline, key)| (*deadline, key.rank()));

        for (_, key) in &due {
            self.deadlines.remove(key);
        }
        due.into_iter().map(|(_, key)| key).collect()
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
