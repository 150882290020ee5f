// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a recording presentation host.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::{Entrance, Exit, Host, PresentationSurface, SurfaceError};
use crate::domain::banner::{BannerDescriptor, BannerId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// A call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Show(Entrance),
    FollowDrag(f32),
    Settle(Duration),
    SetReplyHeight(f32),
    RevealReply,
    ExpandReply(Duration),
    CollapseReply(Duration),
    Focus(bool),
    ClearInput,
    Resize(f32, Duration),
    FadeContent(f32, Duration),
    Dismiss(Exit),
    Teardown,
}

type CallLog = Rc<RefCell<HashMap<BannerId, Vec<Call>>>>;

/// Host that records every surface call per banner.
pub struct RecordingHost {
    available: Cell<bool>,
    fail_next: Cell<bool>,
    height: Rc<Cell<f32>>,
    created: RefCell<Vec<BannerId>>,
    log: CallLog,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            available: Cell::new(true),
            fail_next: Cell::new(false),
            height: Rc::new(Cell::new(64.0)),
            created: RefCell::new(Vec::new()),
            log: Rc::default(),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Makes the next `create_surface` fail.
    pub fn fail_next_surface(&self) {
        self.fail_next.set(true);
    }

    /// Measured height reported by every surface.
    pub fn set_height(&self, height: f32) {
        self.height.set(height);
    }

    pub fn created(&self) -> Vec<BannerId> {
        self.created.borrow().clone()
    }

    pub fn calls(&self, id: BannerId) -> Vec<Call> {
        self.log.borrow().get(&id).cloned().unwrap_or_default()
    }
}

impl Host for RecordingHost {
    fn is_available(&self) -> bool {
        self.available.get()
    }

    fn create_surface(
        &self,
        id: BannerId,
        _descriptor: &BannerDescriptor,
    ) -> Result<Box<dyn PresentationSurface>, SurfaceError> {
        if self.fail_next.replace(false) {
            return Err(SurfaceError::Inflate("broken template".into()));
        }
        self.created.borrow_mut().push(id);
        Ok(Box::new(RecordingSurface {
            id,
            height: Rc::clone(&self.height),
            log: Rc::clone(&self.log),
        }))
    }
}

/// Surface appending its calls to the host log.
pub struct RecordingSurface {
    id: BannerId,
    height: Rc<Cell<f32>>,
    log: CallLog,
}

impl RecordingSurface {
    fn record(&self, call: Call) {
        self.log.borrow_mut().entry(self.id).or_default().push(call);
    }
}

impl PresentationSurface for RecordingSurface {
    fn show(&mut self, entrance: Entrance) -> Result<(), SurfaceError> {
        self.record(Call::Show(entrance));
        Ok(())
    }

    fn measured_height(&self) -> f32 {
        self.height.get()
    }

    fn follow_drag(&mut self, offset: f32) {
        self.record(Call::FollowDrag(offset));
    }

    fn settle(&mut self, duration: Duration) {
        self.record(Call::Settle(duration));
    }

    fn set_reply_height(&mut self, height: f32) {
        self.record(Call::SetReplyHeight(height));
    }

    fn reveal_reply(&mut self) {
        self.record(Call::RevealReply);
    }

    fn expand_reply(&mut self, duration: Duration) {
        self.record(Call::ExpandReply(duration));
    }

    fn collapse_reply(&mut self, duration: Duration) {
        self.record(Call::CollapseReply(duration));
    }

    fn set_input_focus(&mut self, focused: bool) {
        self.record(Call::Focus(focused));
    }

    fn clear_input(&mut self) {
        self.record(Call::ClearInput);
    }

    fn resize(&mut self, height: f32, duration: Duration) {
        self.record(Call::Resize(height, duration));
    }

    fn fade_content(&mut self, opacity: f32, duration: Duration) {
        self.record(Call::FadeContent(opacity, duration));
    }

    fn dismiss(&mut self, exit: Exit) {
        self.record(Call::Dismiss(exit));
    }

    fn teardown(&mut self) {
        self.record(Call::Teardown);
    }
}
