// SPDX-License-Identifier: MPL-2.0
//! Banner builders.
//!
//! Two builders share the [`Configure`] setters:
//!
//! - [`BannerBuilder`] shows its banner right away through the coordinator.
//! - [`PendingBuilder`] parks its banner in the [`PendingSlot`] for the next
//!   screen to pick up.
//!
//! Each only has its own terminal method, so calling the wrong one does not
//! compile:
//!
//! ```compile_fail
//! use iced_banner::application::{Banners, Configure};
//!
//! let banners = Banners::default();
//! // A pending builder cannot be shown directly.
//! banners.schedule_pending("inbox").message("Saved").show();
//! ```
//!
//! ```compile_fail
//! use iced_banner::application::{Banners, Configure};
//! use iced_banner::ui::overlay::OverlayLayer;
//!
//! let mut banners = Banners::default();
//! let layer = OverlayLayer::new();
//! // An immediate builder cannot be scheduled.
//! banners.make(layer.host()).message("Saved").schedule();
//! ```
//!
//! Code that only knows at runtime which kind it holds uses the [`Builder`]
//! union, which reports misuse as [`BannerError::StateViolation`].

use crate::application::coordinator::Coordinator;
use crate::application::pending::{PendingBanner, PendingSlot};
use crate::application::port::Host;
use crate::domain::banner::{
    Anchor, BannerDescriptor, BannerId, BannerKind, ColorSource, Hook, ImageLoaderFn,
    ImageSource, RemoteImage, Rgba, Slot, Template, TextSource, Vibration,
};
use crate::error::{BannerError, Result};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Left or right content slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Setters shared by every builder.
///
/// Text and color setters come in literal/key (or literal/token) pairs;
/// setting one side of a pair replaces the other.
pub trait Configure: Sized {
    /// Working descriptor being configured.
    #[doc(hidden)]
    fn draft_mut(&mut self) -> &mut BannerDescriptor;

    #[must_use]
    fn kind(mut self, kind: BannerKind) -> Self {
        self.draft_mut().kind = kind;
        self
    }

    #[must_use]
    fn title(mut self, text: impl Into<String>) -> Self {
        self.draft_mut().title = Some(TextSource::Literal(text.into()));
        self
    }

    #[must_use]
    fn title_key(mut self, key: impl Into<String>) -> Self {
        self.draft_mut().title = Some(TextSource::Key(key.into()));
        self
    }

    #[must_use]
    fn message(mut self, text: impl Into<String>) -> Self {
        self.draft_mut().message = Some(TextSource::Literal(text.into()));
        self
    }

    #[must_use]
    fn message_key(mut self, key: impl Into<String>) -> Self {
        self.draft_mut().message = Some(TextSource::Key(key.into()));
        self
    }

    /// Auto-dismiss delay. Zero keeps the banner until it is dismissed.
    #[must_use]
    fn duration(mut self, duration: Duration) -> Self {
        self.draft_mut().duration = duration;
        self
    }

    #[must_use]
    fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    #[must_use]
    fn dismissible(mut self, dismissible: bool) -> Self {
        self.draft_mut().dismissible = dismissible;
        self
    }

    #[must_use]
    fn background_color(mut self, color: Rgba) -> Self {
        self.draft_mut().background = Some(ColorSource::Literal(color));
        self
    }

    /// Background from a named palette token.
    #[must_use]
    fn background_token(mut self, token: impl Into<String>) -> Self {
        self.draft_mut().background = Some(ColorSource::Token(token.into()));
        self
    }

    #[must_use]
    fn text_color(mut self, color: Rgba) -> Self {
        self.draft_mut().text_color = Some(ColorSource::Literal(color));
        self
    }

    #[must_use]
    fn text_color_token(mut self, token: impl Into<String>) -> Self {
        self.draft_mut().text_color = Some(ColorSource::Token(token.into()));
        self
    }

    #[must_use]
    fn image(mut self, side: Side, image: ImageSource) -> Self {
        slot_mut(self.draft_mut(), side).image = Some(image);
        self
    }

    /// Remote image fetched through `loader` by the presentation layer.
    #[must_use]
    fn image_url(
        mut self,
        side: Side,
        url: impl Into<String>,
        loader: Hook<ImageLoaderFn>,
    ) -> Self {
        slot_mut(self.draft_mut(), side).remote = Some(RemoteImage {
            url: url.into(),
            loader,
        });
        self
    }

    /// Custom view registered with the presentation layer under `name`.
    #[must_use]
    fn view(mut self, side: Side, name: impl Into<String>) -> Self {
        slot_mut(self.draft_mut(), side).custom_view = Some(name.into());
        self
    }

    #[must_use]
    fn expandable(mut self, expandable: bool) -> Self {
        self.draft_mut().expandable = expandable;
        self
    }

    #[must_use]
    fn reply_hint(mut self, text: impl Into<String>) -> Self {
        self.draft_mut().reply.hint = Some(TextSource::Literal(text.into()));
        self
    }

    #[must_use]
    fn reply_hint_key(mut self, key: impl Into<String>) -> Self {
        self.draft_mut().reply.hint = Some(TextSource::Key(key.into()));
        self
    }

    #[must_use]
    fn reply_button(mut self, text: impl Into<String>) -> Self {
        self.draft_mut().reply.button = Some(TextSource::Literal(text.into()));
        self
    }

    #[must_use]
    fn reply_button_key(mut self, key: impl Into<String>) -> Self {
        self.draft_mut().reply.button = Some(TextSource::Key(key.into()));
        self
    }

    /// Called once with the submitted reply text.
    #[must_use]
    fn on_submit<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.draft_mut().reply.on_submit = Some(Hook::submit(f));
        self
    }

    #[must_use]
    fn on_click<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.draft_mut().hooks.on_click = Some(Hook::new(f));
        self
    }

    #[must_use]
    fn on_dismiss<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.draft_mut().hooks.on_dismiss = Some(Hook::new(f));
        self
    }

    #[must_use]
    fn on_show_complete<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.draft_mut().hooks.on_show_complete = Some(Hook::new(f));
        self
    }

    #[must_use]
    fn on_dismiss_complete<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.draft_mut().hooks.on_dismiss_complete = Some(Hook::new(f));
        self
    }

    #[must_use]
    fn vibration(mut self, vibration: Vibration) -> Self {
        self.draft_mut().vibration = vibration;
        self
    }

    /// Caller layout registered with the presentation layer under `name`.
    #[must_use]
    fn template(mut self, name: impl Into<String>) -> Self {
        self.draft_mut().template = Template::Custom(name.into());
        self
    }

    #[must_use]
    fn anchor(mut self, anchor: Anchor) -> Self {
        self.draft_mut().anchor = anchor;
        self
    }
}

fn slot_mut(draft: &mut BannerDescriptor, side: Side) -> &mut Slot {
    match side {
        Side::Left => &mut draft.left,
        Side::Right => &mut draft.right,
    }
}

// =============================================================================
// BannerBuilder
// =============================================================================

/// Builder that shows its banner immediately.
pub struct BannerBuilder<'a> {
    coordinator: &'a mut Coordinator,
    host: Rc<dyn Host>,
    draft: BannerDescriptor,
}

impl<'a> BannerBuilder<'a> {
    #[must_use]
    pub fn new(coordinator: &'a mut Coordinator, host: Rc<dyn Host>) -> Self {
        Self {
            coordinator,
            host,
            draft: BannerDescriptor::default(),
        }
    }

    /// Snapshot of the current configuration.
    #[must_use]
    pub fn build(&self) -> BannerDescriptor {
        self.draft.clone()
    }

    /// Hands the banner to the coordinator.
    pub fn show(self) -> BannerId {
        self.coordinator.request_show(self.host, self.draft)
    }
}

impl Configure for BannerBuilder<'_> {
    fn draft_mut(&mut self) -> &mut BannerDescriptor {
        &mut self.draft
    }
}

// =============================================================================
// PendingBuilder
// =============================================================================

/// Builder that parks its banner for the next screen.
pub struct PendingBuilder {
    slot: Arc<PendingSlot>,
    origin: String,
    draft: BannerDescriptor,
}

impl PendingBuilder {
    /// Starts a pending banner; `origin` labels the screen scheduling it.
    #[must_use]
    pub fn new(slot: Arc<PendingSlot>, origin: impl Into<String>) -> Self {
        Self {
            slot,
            origin: origin.into(),
            draft: BannerDescriptor::default(),
        }
    }

    #[must_use]
    pub fn build(&self) -> BannerDescriptor {
        self.draft.clone()
    }

    /// Stores the banner in the pending slot, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::MissingMessage`] when no message is set.
    pub fn schedule(self) -> Result<()> {
        if self.draft.message.as_ref().map_or(true, TextSource::is_blank) {
            return Err(BannerError::MissingMessage);
        }
        self.slot.store(PendingBanner {
            descriptor: self.draft,
            origin: self.origin,
        });
        Ok(())
    }
}

impl Configure for PendingBuilder {
    fn draft_mut(&mut self) -> &mut BannerDescriptor {
        &mut self.draft
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Either builder, for code paths that pick the mode at runtime.
pub enum Builder<'a> {
    Immediate(BannerBuilder<'a>),
    Pending(PendingBuilder),
}

impl Builder<'_> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Builder::Pending(_))
    }

    #[must_use]
    pub fn build(&self) -> BannerDescriptor {
        match self {
            Builder::Immediate(builder) => builder.build(),
            Builder::Pending(builder) => builder.build(),
        }
    }

    /// Shows the banner.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::StateViolation`] on a pending builder.
    pub fn show(self) -> Result<BannerId> {
        match self {
            Builder::Immediate(builder) => Ok(builder.show()),
            Builder::Pending(_) => Err(BannerError::StateViolation(
                "show() called on a pending builder",
            )),
        }
    }

    /// Schedules the banner in the pending slot.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::StateViolation`] on an immediate builder and
    /// [`BannerError::MissingMessage`] when no message is set.
    pub fn schedule(self) -> Result<()> {
        match self {
            Builder::Pending(builder) => builder.schedule(),
            Builder::Immediate(_) => Err(BannerError::StateViolation(
                "schedule() called on an immediate builder",
            )),
        }
    }
}

impl Configure for Builder<'_> {
    fn draft_mut(&mut self) -> &mut BannerDescriptor {
        match self {
            Builder::Immediate(builder) => builder.draft_mut(),
            Builder::Pending(builder) => builder.draft_mut(),
        }
    }
}

impl<'a> From<BannerBuilder<'a>> for Builder<'a> {
    fn from(builder: BannerBuilder<'a>) -> Self {
        Builder::Immediate(builder)
    }
}

impl From<PendingBuilder> for Builder<'_> {
    fn from(builder: PendingBuilder) -> Self {
        Builder::Pending(builder)
    }
}
