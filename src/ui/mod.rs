// SPDX-License-Identifier: MPL-2.0
//! Iced presentation of banners.
//!
//! This module implements the presentation ports on top of Iced, following
//! the Elm-style "state down, messages up" pattern.
//!
//! - [`overlay`] - The [`OverlayLayer`](overlay::OverlayLayer) host and its surfaces
//! - [`banner`] - Banner card rendering and message routing
//! - [`subscription`] - Pointer, touch, resize and frame tick events
//! - [`easing`] - Easing curves and tweens for transitions
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//!
//! # Wiring
//!
//! The application root owns a [`Banners`](crate::application::Banners) and
//! an [`OverlayLayer`](overlay::OverlayLayer), stacks [`banner::view`] above
//! its screen, maps [`subscription::subscription`] into its own messages and
//! forwards them to [`banner::update`].

pub mod banner;
pub mod design_tokens;
pub mod easing;
pub mod overlay;
pub mod subscription;
