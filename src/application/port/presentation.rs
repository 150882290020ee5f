// SPDX-License-Identifier: MPL-2.0
//! Presentation port definitions.
//!
//! A [`Host`] is the screen a banner is attached to. It hands out one
//! [`PresentationSurface`] per displayed banner; the surface performs the
//! visual transitions the coordinator and gesture machine ask for.
//!
//! Surfaces only animate. They never decide anything and never report back:
//! the coordinator owns every deadline and knows when each transition ends.

use crate::domain::banner::{Anchor, BannerDescriptor, BannerId};
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// SurfaceError
// =============================================================================

/// Errors raised while creating or showing a surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The banner content could not be built (bad template, missing view).
    #[error("failed to inflate banner: {0}")]
    Inflate(String),

    /// The surface could not be positioned on the host.
    #[error("failed to position banner: {0}")]
    Position(String),

    /// The host went away between the availability check and display.
    #[error("host unavailable")]
    HostUnavailable,
}

// =============================================================================
// Transition parameters
// =============================================================================

/// Entrance transition of a newly displayed banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub anchor: Anchor,
    pub duration: Duration,
    /// Delay before the content fades in. Zero when nothing is replaced.
    pub content_delay: Duration,
    /// Length of the content fade once the delay has passed.
    pub content_fade: Duration,
}

/// Visual style of an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStyle {
    /// Slide back out through the anchor edge.
    Slide,
    /// Shrink vertically toward the anchor edge.
    RollUp,
    /// Fade out in place while shrinking to the replacement's height.
    Fade,
}

/// Exit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    pub style: ExitStyle,
    pub duration: Duration,
}

// =============================================================================
// Ports
// =============================================================================

/// A screen that can display banners.
pub trait Host {
    /// Whether the screen is still alive and attached.
    fn is_available(&self) -> bool;

    /// Creates a surface for `descriptor` from its template.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] when the content cannot be built.
    fn create_surface(
        &self,
        id: BannerId,
        descriptor: &BannerDescriptor,
    ) -> Result<Box<dyn PresentationSurface>, SurfaceError>;
}

/// One displayed banner.
pub trait PresentationSurface {
    /// Attaches the surface and starts the entrance transition.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] when the surface cannot be placed.
    fn show(&mut self, entrance: Entrance) -> Result<(), SurfaceError>;

    /// Height of the laid-out banner in logical pixels.
    fn measured_height(&self) -> f32;

    /// Offsets the banner toward the away edge.
    fn follow_drag(&mut self, offset: f32);

    /// Animates back to the resting position.
    fn settle(&mut self, duration: Duration);

    fn set_reply_height(&mut self, height: f32);

    /// Shows the reply input once enough height is available.
    fn reveal_reply(&mut self);

    /// Grows the reply area to fill the available space.
    fn expand_reply(&mut self, duration: Duration);

    fn collapse_reply(&mut self, duration: Duration);

    fn set_input_focus(&mut self, focused: bool);

    fn clear_input(&mut self);

    /// Animates the banner height.
    fn resize(&mut self, height: f32, duration: Duration);

    /// Animates the opacity of the content, leaving the background.
    fn fade_content(&mut self, opacity: f32, duration: Duration);

    /// Starts the exit transition.
    fn dismiss(&mut self, exit: Exit);

    /// Removes the surface without any transition.
    fn teardown(&mut self);
}
