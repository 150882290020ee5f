// SPDX-License-Identifier: MPL-2.0
//! States, events and effects of the gesture machine.

use crate::domain::banner::Anchor;
use serde::{Deserialize, Serialize};

/// Pointer position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Largest axis distance to `other`.
    #[must_use]
    pub fn max_axis_distance(self, other: Point) -> f32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// Why a banner left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    /// Auto-dismiss timer ran out.
    Timeout,
    /// Close button or programmatic dismissal.
    Manual,
    /// Swiped toward the away edge past the threshold.
    Swipe,
    /// Reply submitted from the expanded state.
    Submitted,
    /// Replaced by a newer banner.
    Replaced,
    /// Torn down without transition (host going away).
    Shutdown,
}

/// Gesture state of one banner.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// Not displayed yet.
    #[default]
    Hidden,
    /// Entrance transition running.
    Entering,
    /// On screen and idle.
    Visible,
    /// Finger down, no direction committed yet.
    Pressed { origin: Point },
    /// Following the finger toward the away edge.
    Dragging { origin: Point, offset: f32 },
    /// Growing the reply area toward the opposite edge.
    Expanding {
        origin: Point,
        reply_height: f32,
        revealed: bool,
    },
    /// Movement that is neither a dismiss nor an expand; left to child
    /// controls.
    PassThrough { origin: Point },
    /// Reply area fully open and focused.
    Expanded,
    /// Exit transition running.
    Exiting { reason: ExitReason },
    /// Gone for good.
    Dismissed,
}

impl GestureState {
    /// On screen and not leaving.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(
            self,
            GestureState::Visible
                | GestureState::Pressed { .. }
                | GestureState::Dragging { .. }
                | GestureState::Expanding { .. }
                | GestureState::PassThrough { .. }
                | GestureState::Expanded
        )
    }

    /// The user is composing, or opening the composer for, a reply.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        matches!(
            self,
            GestureState::Expanding { .. } | GestureState::Expanded
        )
    }

    /// A finger is down on the banner.
    #[must_use]
    pub fn is_touching(&self) -> bool {
        matches!(
            self,
            GestureState::Pressed { .. }
                | GestureState::Dragging { .. }
                | GestureState::Expanding { .. }
                | GestureState::PassThrough { .. }
        )
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self, GestureState::Exiting { .. })
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        matches!(self, GestureState::Dismissed)
    }
}

/// Input to the gesture machine.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    /// The surface was attached and asked to appear.
    Displayed,
    /// The entrance transition completed.
    EntranceFinished,
    TouchDown(Point),
    TouchMove(Point),
    TouchUp(Point),
    /// The toolkit took the pointer away (window lost focus...).
    TouchCancel,
    /// The auto-dismiss countdown ran out.
    AutoDismissElapsed,
    /// Close button or programmatic dismissal.
    CloseRequested,
    /// Reply text submitted (button or keyboard send action).
    Submit(String),
    /// A newer banner takes this one's place.
    Superseded,
    /// The exit transition completed.
    ExitFinished,
}

/// Work requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PlayEntrance,
    /// (Re)start the auto-dismiss countdown with its full duration.
    StartAutoDismiss,
    CancelAutoDismiss,
    /// Banner fully shown; the coordinator may look at its queue.
    NotifyShown,
    InvokeShowComplete,
    InvokeClick,
    /// Move the surface by this many pixels toward the away edge.
    FollowDrag(f32),
    /// Animate back to the resting position.
    SettleToRest,
    SetReplyHeight(f32),
    RevealReply,
    /// Grow the reply area to the available space.
    ExpandReply,
    CollapseReply,
    FocusInput,
    ReleaseFocus,
    InvokeSubmit(String),
    ClearInput,
    PlayExit(ExitReason),
    /// Run the single dismissal routine.
    Finalize(ExitReason),
}

/// Gesture thresholds in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    /// Movement ignored before a direction is committed.
    pub touch_slop: f32,
    /// Release displacement that dismisses a dragged banner.
    pub dismiss: f32,
    /// Release reply height that snaps to expanded.
    pub expand_snap: f32,
    /// Reply height at which the input becomes visible.
    pub reveal: f32,
    /// Largest reply height reachable by dragging.
    pub max_reply_height: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            dismiss: 100.0,
            expand_snap: 120.0,
            reveal: 40.0,
            max_reply_height: 240.0,
        }
    }
}

/// Per-banner constants the transition function depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureContext {
    pub anchor: Anchor,
    pub expandable: bool,
    pub auto_dismiss: bool,
    pub thresholds: GestureThresholds,
}

impl Default for GestureContext {
    fn default() -> Self {
        Self {
            anchor: Anchor::Top,
            expandable: false,
            auto_dismiss: true,
            thresholds: GestureThresholds::default(),
        }
    }
}
