// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for the tunable values of the
//! banner system. They are empirically chosen and meant to be overridden
//! through `banner.toml` when an application needs a different feel.
//!
//! # Categories
//!
//! - **Timing**: Display floor, transition choreography
//! - **Gesture**: Touch slop and release thresholds
//! - **Queue**: Pending request capacity
//! - **Diagnostics**: Event log capacity

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Auto-dismiss delay of a banner shown without explicit duration (ms).
pub const DEFAULT_BANNER_DURATION_MS: u64 = 3000;

/// Minimum time a banner stays on screen before a newer one may replace it (ms).
pub const DEFAULT_MIN_DISPLAY_MS: u64 = 1000;

/// Upper bound accepted for the display floor (ms).
pub const MAX_MIN_DISPLAY_MS: u64 = 10_000;

/// Gap between the end of an exit and the next queued banner (ms).
pub const DEFAULT_TRANSITION_GAP_MS: u64 = 100;

/// Entrance transition length (ms).
pub const DEFAULT_ENTRANCE_MS: u64 = 300;

/// Slide-out exit length (ms).
pub const DEFAULT_EXIT_MS: u64 = 250;

/// Roll-up exit length after a reply is submitted (ms).
pub const DEFAULT_ROLL_UP_MS: u64 = 350;

/// Shrink-and-fade choreography of a replaced banner (ms).
pub const DEFAULT_REPLACE_MS: u64 = 320;

/// Time for a replaced banner's content to fade out (ms).
pub const DEFAULT_REPLACE_CONTENT_FADE_MS: u64 = 120;

/// Delay before a replacing banner's content fades in (ms).
pub const DEFAULT_CONTENT_REVEAL_DELAY_MS: u64 = 160;

/// Fade-in of banner content once its reveal delay has passed (ms).
pub const DEFAULT_CONTENT_FADE_IN_MS: u64 = 150;

/// Snap of the reply area when it expands or collapses (ms).
pub const DEFAULT_REPLY_SNAP_MS: u64 = 200;

/// Smallest margin kept between the outgoing content fade and the incoming
/// content reveal (ms).
pub const MIN_REVEAL_MARGIN_MS: u64 = 20;

/// Upper bound accepted for any transition length (ms).
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Movement ignored before a drag direction is committed (px).
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Release displacement that dismisses a dragged banner (px).
pub const DEFAULT_DISMISS_THRESHOLD: f32 = 100.0;

/// Release reply height that snaps the reply area open (px).
pub const DEFAULT_EXPAND_SNAP_THRESHOLD: f32 = 120.0;

/// Reply height at which the input becomes visible (px).
pub const DEFAULT_REPLY_REVEAL_THRESHOLD: f32 = 40.0;

/// Largest reply height reachable by dragging (px).
pub const DEFAULT_MAX_REPLY_HEIGHT: f32 = 240.0;

/// Upper bound accepted for any gesture distance (px).
pub const MAX_GESTURE_DISTANCE: f32 = 2000.0;

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Pending request capacity.
pub const DEFAULT_QUEUE_SIZE: usize = 1;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Events kept by the diagnostics collector.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::banner::queue_capacity_bounds;
    use crate::domain::gesture::GestureThresholds;

    #[test]
    fn content_reveal_happens_after_outgoing_fade() {
        assert!(
            DEFAULT_CONTENT_REVEAL_DELAY_MS
                >= DEFAULT_REPLACE_CONTENT_FADE_MS + MIN_REVEAL_MARGIN_MS
        );
        assert!(DEFAULT_CONTENT_REVEAL_DELAY_MS < DEFAULT_REPLACE_MS);
    }

    #[test]
    fn queue_default_matches_domain_bounds() {
        assert_eq!(DEFAULT_QUEUE_SIZE, queue_capacity_bounds::DEFAULT);
    }

    #[test]
    fn gesture_defaults_match_domain_defaults() {
        let thresholds = GestureThresholds::default();
        assert_eq!(thresholds.touch_slop, DEFAULT_TOUCH_SLOP);
        assert_eq!(thresholds.dismiss, DEFAULT_DISMISS_THRESHOLD);
        assert_eq!(thresholds.expand_snap, DEFAULT_EXPAND_SNAP_THRESHOLD);
        assert_eq!(thresholds.reveal, DEFAULT_REPLY_REVEAL_THRESHOLD);
        assert_eq!(thresholds.max_reply_height, DEFAULT_MAX_REPLY_HEIGHT);
    }

    #[test]
    fn slop_is_below_every_release_threshold() {
        assert!(DEFAULT_TOUCH_SLOP < DEFAULT_REPLY_REVEAL_THRESHOLD);
        assert!(DEFAULT_REPLY_REVEAL_THRESHOLD < DEFAULT_EXPAND_SNAP_THRESHOLD);
        assert!(DEFAULT_EXPAND_SNAP_THRESHOLD <= DEFAULT_MAX_REPLY_HEIGHT);
    }
}
