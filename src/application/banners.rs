// SPDX-License-Identifier: MPL-2.0
//! Entry point of the banner system.
//!
//! [`Banners`] bundles the coordinator and the pending slot. The application
//! root owns one and passes it where banners are requested.
//!
//! # Example
//!
//! ```
//! use iced_banner::application::{Banners, Configure};
//! use iced_banner::domain::banner::BannerKind;
//! use iced_banner::ui::overlay::OverlayLayer;
//! use std::time::Duration;
//!
//! let layer = OverlayLayer::new();
//! let mut banners = Banners::default();
//!
//! banners.show(layer.host(), BannerKind::Success, "Saved", None);
//!
//! banners
//!     .make(layer.host())
//!     .kind(BannerKind::Info)
//!     .title("New message")
//!     .message("Are you coming tonight?")
//!     .expandable(true)
//!     .on_submit(|text| println!("reply: {text}"))
//!     .duration(Duration::from_secs(5))
//!     .show();
//! ```

use crate::application::builder::{BannerBuilder, Configure, PendingBuilder};
use crate::application::coordinator::Coordinator;
use crate::application::pending::PendingSlot;
use crate::application::port::{Clock, Host};
use crate::config::Settings;
use crate::domain::banner::{BannerDescriptor, BannerId, BannerKind};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Coordinator plus pending slot.
pub struct Banners {
    coordinator: Coordinator,
    pending: Arc<PendingSlot>,
}

impl Banners {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::from_coordinator(Coordinator::new(settings))
    }

    #[must_use]
    pub fn with_clock(settings: Settings, clock: Rc<dyn Clock>) -> Self {
        Self::from_coordinator(Coordinator::with_clock(settings, clock))
    }

    /// Wraps a coordinator configured by hand (haptics, diagnostics).
    #[must_use]
    pub fn from_coordinator(coordinator: Coordinator) -> Self {
        Self {
            coordinator,
            pending: Arc::new(PendingSlot::new()),
        }
    }

    /// Shows a plain banner. `None` uses the default duration.
    pub fn show(
        &mut self,
        host: Rc<dyn Host>,
        kind: BannerKind,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> BannerId {
        self.make(host)
            .kind(kind)
            .message(message)
            .duration(duration.unwrap_or(BannerDescriptor::DEFAULT_DURATION))
            .show()
    }

    /// Starts a banner shown on `host` when the builder's `show` is called.
    pub fn make(&mut self, host: Rc<dyn Host>) -> BannerBuilder<'_> {
        BannerBuilder::new(&mut self.coordinator, host)
    }

    /// Starts a banner for the next screen. `context` labels the caller.
    #[must_use]
    pub fn schedule_pending(&self, context: impl Into<String>) -> PendingBuilder {
        self.pending.builder(context)
    }

    pub fn dismiss_current(&mut self) {
        self.coordinator.dismiss_current();
    }

    /// Shows the parked banner on `host`, if any.
    pub fn show_pending_if_available(&mut self, host: Rc<dyn Host>) -> bool {
        self.pending
            .consume_if_available(host, &mut self.coordinator)
    }

    /// Drops the parked banner. Returns whether there was one.
    pub fn clear_pending(&self) -> bool {
        self.pending.clear()
    }

    /// Shared slot, for scheduling from other threads.
    #[must_use]
    pub fn pending_slot(&self) -> Arc<PendingSlot> {
        Arc::clone(&self.pending)
    }

    #[must_use]
    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut Coordinator {
        &mut self.coordinator
    }

    /// Advances timers; call on every frame tick.
    pub fn tick(&mut self) {
        self.coordinator.tick();
    }
}

impl Default for Banners {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
