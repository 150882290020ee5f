// SPDX-License-Identifier: MPL-2.0
//! Core banner data structures.
//!
//! This module defines the immutable [`BannerDescriptor`] and the small value
//! types it is made of.

use super::hooks::{Callback, Hook, Hooks, SubmitFn};
use super::slot::Slot;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unique identifier for a banner request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BannerId(u64);

impl BannerId {
    /// Creates a new unique banner ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for BannerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Banner kind, selects the default styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerKind {
    /// Operation completed successfully (green).
    Success,
    /// Informational message (blue).
    #[default]
    Info,
    /// Something needs attention (orange).
    Warning,
    /// Something failed (red).
    Error,
    /// No default styling; colors come from the descriptor.
    Custom,
}

/// Text given either literally or as an i18n key resolved at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Literal text, shown as-is.
    Literal(String),
    /// Fluent message key.
    Key(String),
}

impl TextSource {
    /// Returns the literal text, if this is a literal.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            TextSource::Literal(text) => Some(text),
            TextSource::Key(_) => None,
        }
    }

    /// Returns the i18n key, if this is a key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            TextSource::Key(key) => Some(key),
            TextSource::Literal(_) => None,
        }
    }

    /// Returns whether the text is blank once resolved literally.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            TextSource::Literal(text) | TextSource::Key(text) => text.trim().is_empty(),
        }
    }
}

/// Linear RGBA color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an opaque color from 8-bit components.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }
}

/// Color given either literally or as a named palette token.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    /// Literal color value.
    Literal(Rgba),
    /// Palette token resolved by the presentation layer (e.g. `"success-500"`).
    Token(String),
}

/// Haptic feedback played when the banner appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vibration {
    #[default]
    None,
    Short,
    Medium,
    Long,
}

impl Vibration {
    /// Returns the vibration length, `None` when no feedback is requested.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Vibration::None => None,
            Vibration::Short => Some(Duration::from_millis(50)),
            Vibration::Medium => Some(Duration::from_millis(100)),
            Vibration::Long => Some(Duration::from_millis(200)),
        }
    }
}

/// Screen edge the banner is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    Top,
    Bottom,
}

impl Anchor {
    /// Displacement of `to` relative to `from` toward the edge the banner
    /// leaves through (upward for a top banner).
    #[must_use]
    pub fn away_displacement(self, from_y: f32, to_y: f32) -> f32 {
        match self {
            Anchor::Top => from_y - to_y,
            Anchor::Bottom => to_y - from_y,
        }
    }
}

/// Layout used to build the banner surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Template {
    /// Built-in layout.
    #[default]
    Default,
    /// Caller layout registered under this name.
    Custom(String),
}

/// Reply area configuration of an expandable banner.
#[derive(Debug, Clone, Default)]
pub struct ReplyConfig {
    pub(crate) hint: Option<TextSource>,
    pub(crate) button: Option<TextSource>,
    pub(crate) on_submit: Option<Hook<SubmitFn>>,
}

impl ReplyConfig {
    /// Placeholder of the reply input, `None` to use the localized default.
    #[must_use]
    pub fn hint(&self) -> Option<&TextSource> {
        self.hint.as_ref()
    }

    /// Label of the submit button, `None` to use the localized default.
    #[must_use]
    pub fn button(&self) -> Option<&TextSource> {
        self.button.as_ref()
    }

    /// Submission callback.
    #[must_use]
    pub fn on_submit(&self) -> Option<&Hook<SubmitFn>> {
        self.on_submit.as_ref()
    }
}

/// Everything needed to render and drive one banner.
///
/// Descriptors are produced by the builders and never change afterwards;
/// every terminal builder call yields a fresh value.
#[derive(Debug, Clone)]
pub struct BannerDescriptor {
    pub(crate) kind: BannerKind,
    pub(crate) title: Option<TextSource>,
    pub(crate) message: Option<TextSource>,
    pub(crate) duration: Duration,
    pub(crate) dismissible: bool,
    pub(crate) background: Option<ColorSource>,
    pub(crate) text_color: Option<ColorSource>,
    pub(crate) left: Slot,
    pub(crate) right: Slot,
    pub(crate) expandable: bool,
    pub(crate) reply: ReplyConfig,
    pub(crate) hooks: Hooks,
    pub(crate) vibration: Vibration,
    pub(crate) template: Template,
    pub(crate) anchor: Anchor,
}

impl BannerDescriptor {
    /// Auto-dismiss delay used when none is configured.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

    #[must_use]
    pub fn kind(&self) -> BannerKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&TextSource> {
        self.title.as_ref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&TextSource> {
        self.message.as_ref()
    }

    /// Literal message text, `None` when unset or given as a key.
    #[must_use]
    pub fn message_literal(&self) -> Option<&str> {
        self.message.as_ref().and_then(TextSource::literal)
    }

    /// Message i18n key, `None` when unset or given literally.
    #[must_use]
    pub fn message_key(&self) -> Option<&str> {
        self.message.as_ref().and_then(TextSource::key)
    }

    /// Auto-dismiss delay; zero disables auto-dismiss.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether the banner leaves on its own.
    #[must_use]
    pub fn has_auto_dismiss(&self) -> bool {
        !self.duration.is_zero()
    }

    /// Whether a close button is offered.
    ///
    /// A custom template with auto-dismiss never gets one: the caller layout
    /// owns its controls and the timer takes care of leaving.
    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        let custom = matches!(self.template, Template::Custom(_));
        self.dismissible && !(custom && self.has_auto_dismiss())
    }

    #[must_use]
    pub fn background(&self) -> Option<&ColorSource> {
        self.background.as_ref()
    }

    #[must_use]
    pub fn text_color(&self) -> Option<&ColorSource> {
        self.text_color.as_ref()
    }

    #[must_use]
    pub fn left(&self) -> &Slot {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &Slot {
        &self.right
    }

    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.expandable
    }

    #[must_use]
    pub fn reply(&self) -> &ReplyConfig {
        &self.reply
    }

    #[must_use]
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    #[must_use]
    pub fn on_click(&self) -> Option<&Hook<Callback>> {
        self.hooks.on_click.as_ref()
    }

    #[must_use]
    pub fn vibration(&self) -> Vibration {
        self.vibration
    }

    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }
}

impl Default for BannerDescriptor {
    fn default() -> Self {
        Self {
            kind: BannerKind::default(),
            title: None,
            message: None,
            duration: Self::DEFAULT_DURATION,
            dismissible: true,
            background: None,
            text_color: None,
            left: Slot::default(),
            right: Slot::default(),
            expandable: false,
            reply: ReplyConfig::default(),
            hooks: Hooks::default(),
            vibration: Vibration::default(),
            template: Template::default(),
            anchor: Anchor::default(),
        }
    }
}
