// SPDX-License-Identifier: MPL-2.0
//! Deferred invocation of caller callbacks.
//!
//! Callbacks are never run from inside a transition. They are collected
//! while the coordinator updates its state and flushed once it is
//! consistent again, so a callback that shows another banner sees a settled
//! coordinator.

use crate::diagnostics::{BannerEvent, CallbackKind, DiagnosticsHandle};
use crate::domain::banner::{BannerId, Callback, Hook, SubmitFn};
use std::collections::VecDeque;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A callback waiting to run.
#[derive(Debug, Clone)]
enum Invocation {
    Plain(Hook<Callback>),
    Submit(Hook<SubmitFn>, String),
}

#[derive(Debug, Clone)]
struct Deferred {
    banner: BannerId,
    kind: CallbackKind,
    invocation: Invocation,
}

/// FIFO of callbacks waiting to run.
#[derive(Debug, Default)]
pub struct DeferredCallbacks {
    pending: VecDeque<Deferred>,
}

impl DeferredCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `hook` if present.
    pub fn push(&mut self, banner: BannerId, kind: CallbackKind, hook: Option<&Hook<Callback>>) {
        if let Some(hook) = hook {
            self.pending.push_back(Deferred {
                banner,
                kind,
                invocation: Invocation::Plain(hook.clone()),
            });
        }
    }

    /// Queues a submit hook with its text if present.
    pub fn push_submit(&mut self, banner: BannerId, hook: Option<&Hook<SubmitFn>>, text: String) {
        if let Some(hook) = hook {
            self.pending.push_back(Deferred {
                banner,
                kind: CallbackKind::Submit,
                invocation: Invocation::Submit(hook.clone(), text),
            });
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Runs every queued callback in order. A panicking callback is logged
    /// and does not stop the others.
    ///
    /// Returns how many callbacks ran.
    pub fn flush(&mut self, diagnostics: Option<&DiagnosticsHandle>) -> usize {
        let mut ran = 0;
        while let Some(deferred) = self.pending.pop_front() {
            let result = catch_unwind(AssertUnwindSafe(|| match &deferred.invocation {
                Invocation::Plain(hook) => hook.call(),
                Invocation::Submit(hook, text) => hook.call(text),
            }));
            ran += 1;

            if result.is_err() {
                tracing::error!(
                    banner = deferred.banner.value(),
                    callback = ?deferred.kind,
                    "banner callback panicked"
                );
                if let Some(diagnostics) = diagnostics {
                    diagnostics.log(BannerEvent::CallbackFailed {
                        id: deferred.banner.value(),
                        callback: deferred.kind,
                    });
                }
            }
        }
        ran
    }
}
