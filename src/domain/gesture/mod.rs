// SPDX-License-Identifier: MPL-2.0
//! Per-banner gesture state machine.
//!
//! The machine is a pure function of `(state, event)`: it returns the next
//! state and a list of [`Effect`]s for the coordinator to carry out. It owns
//! no timers and no surface, which keeps every gesture path testable without
//! a GUI.
//!
//! ```text
//! Hidden -> Entering -> Visible -> Pressed -> Dragging    -> Exiting -> Dismissed
//!                          ^          |    -> Expanding   -> Expanded -> Exiting
//!                          |          |    -> PassThrough
//!                          +----------+ (tap, bounce back, collapse)
//! ```

mod machine;
mod state;

pub use machine::{transition, GestureMachine};
pub use state::{
    Effect, ExitReason, GestureContext, GestureEvent, GestureState, GestureThresholds, Point,
};
