// SPDX-License-Identifier: MPL-2.0
//! Gesture transition function.

use super::state::{Effect, ExitReason, GestureContext, GestureEvent, GestureState, Point};

/// Computes the next state and the effects of `event` in `state`.
///
/// Events that make no sense in the current state leave it unchanged and
/// produce no effect; stale timer expirations are dropped that way.
#[must_use]
pub fn transition(
    state: &GestureState,
    event: GestureEvent,
    ctx: &GestureContext,
) -> (GestureState, Vec<Effect>) {
    use GestureEvent as E;
    use GestureState as S;

    match (state, event) {
        (S::Hidden, E::Displayed) => (S::Entering, vec![Effect::PlayEntrance]),
        (S::Hidden, E::CloseRequested | E::Superseded) => (S::Dismissed, Vec::new()),

        (S::Entering, E::EntranceFinished) => {
            let mut effects = Vec::new();
            restart_timer(ctx, &mut effects);
            effects.push(Effect::NotifyShown);
            effects.push(Effect::InvokeShowComplete);
            (S::Visible, effects)
        }

        // A touch may land while the banner is still sliding in. The
        // auto-dismiss timer is not armed yet, so there is nothing to cancel.
        (S::Entering, E::TouchDown(p)) => (S::Pressed { origin: p }, Vec::new()),
        // The entrance of a banner that was touched early still completes,
        // but the timer is left to the release that ends the touch.
        (
            S::Visible
            | S::Pressed { .. }
            | S::Dragging { .. }
            | S::PassThrough { .. }
            | S::Expanding { .. }
            | S::Expanded,
            E::EntranceFinished,
        ) => (
            state.clone(),
            vec![Effect::NotifyShown, Effect::InvokeShowComplete],
        ),

        (S::Visible, E::TouchDown(p)) => {
            (S::Pressed { origin: p }, vec![Effect::CancelAutoDismiss])
        }
        (S::Visible, E::AutoDismissElapsed) => exit(ExitReason::Timeout, Vec::new()),

        (S::Pressed { origin }, E::TouchMove(p)) => commit(*origin, p, ctx),
        (S::Pressed { origin }, E::TouchUp(p)) => {
            let mut effects = Vec::new();
            if origin.max_axis_distance(p) <= ctx.thresholds.touch_slop {
                effects.push(Effect::InvokeClick);
            }
            restart_timer(ctx, &mut effects);
            (S::Visible, effects)
        }

        (S::Dragging { origin, .. }, E::TouchMove(p)) => {
            let offset = ctx.anchor.away_displacement(origin.y, p.y).max(0.0);
            (
                S::Dragging {
                    origin: *origin,
                    offset,
                },
                vec![Effect::FollowDrag(offset)],
            )
        }
        (S::Dragging { origin, .. }, E::TouchUp(p)) => {
            let offset = ctx.anchor.away_displacement(origin.y, p.y).max(0.0);
            if offset >= ctx.thresholds.dismiss {
                exit(ExitReason::Swipe, Vec::new())
            } else {
                let mut effects = vec![Effect::SettleToRest];
                restart_timer(ctx, &mut effects);
                (S::Visible, effects)
            }
        }

        (
            S::Expanding {
                origin, revealed, ..
            },
            E::TouchMove(p),
        ) => {
            let pull = -ctx.anchor.away_displacement(origin.y, p.y);
            expanding(*origin, pull, *revealed, ctx)
        }
        (S::Expanding { origin, .. }, E::TouchUp(p)) => {
            let pull = -ctx.anchor.away_displacement(origin.y, p.y);
            let height = pull.clamp(0.0, ctx.thresholds.max_reply_height);
            if height >= ctx.thresholds.expand_snap {
                (S::Expanded, vec![Effect::ExpandReply, Effect::FocusInput])
            } else {
                let mut effects = vec![Effect::CollapseReply];
                restart_timer(ctx, &mut effects);
                (S::Visible, effects)
            }
        }

        (S::PassThrough { .. }, E::TouchUp(_) | E::TouchCancel)
        | (S::Pressed { .. }, E::TouchCancel) => {
            let mut effects = Vec::new();
            restart_timer(ctx, &mut effects);
            (S::Visible, effects)
        }
        (S::Dragging { .. }, E::TouchCancel) => {
            let mut effects = vec![Effect::SettleToRest];
            restart_timer(ctx, &mut effects);
            (S::Visible, effects)
        }
        (S::Expanding { .. }, E::TouchCancel) => {
            let mut effects = vec![Effect::CollapseReply];
            restart_timer(ctx, &mut effects);
            (S::Visible, effects)
        }

        (S::Expanded, E::Submit(text)) if text.trim().is_empty() => (S::Expanded, Vec::new()),
        (S::Expanded, E::Submit(text)) => exit(
            ExitReason::Submitted,
            vec![
                Effect::InvokeSubmit(text),
                Effect::ClearInput,
                Effect::CollapseReply,
                Effect::ReleaseFocus,
            ],
        ),

        (S::Expanded, E::CloseRequested) => exit(
            ExitReason::Manual,
            vec![Effect::ReleaseFocus, Effect::CancelAutoDismiss],
        ),
        (S::Expanded, E::Superseded) => exit(
            ExitReason::Replaced,
            vec![Effect::ReleaseFocus, Effect::CancelAutoDismiss],
        ),
        (S::Expanding { .. }, E::CloseRequested) => exit(
            ExitReason::Manual,
            vec![Effect::CancelAutoDismiss, Effect::CollapseReply],
        ),
        (S::Expanding { .. }, E::Superseded) => exit(
            ExitReason::Replaced,
            vec![Effect::CancelAutoDismiss, Effect::CollapseReply],
        ),
        (
            S::Entering
            | S::Visible
            | S::Pressed { .. }
            | S::Dragging { .. }
            | S::PassThrough { .. },
            E::CloseRequested,
        ) => exit(ExitReason::Manual, vec![Effect::CancelAutoDismiss]),
        (
            S::Entering
            | S::Visible
            | S::Pressed { .. }
            | S::Dragging { .. }
            | S::PassThrough { .. },
            E::Superseded,
        ) => exit(ExitReason::Replaced, vec![Effect::CancelAutoDismiss]),

        (S::Exiting { reason }, E::ExitFinished) => {
            (S::Dismissed, vec![Effect::Finalize(*reason)])
        }

        (state, _) => (state.clone(), Vec::new()),
    }
}

/// Decides what a move out of `Pressed` commits to.
fn commit(origin: Point, p: Point, ctx: &GestureContext) -> (GestureState, Vec<Effect>) {
    let dx = (p.x - origin.x).abs();
    let dy = (p.y - origin.y).abs();

    if dx.max(dy) <= ctx.thresholds.touch_slop {
        return (GestureState::Pressed { origin }, Vec::new());
    }
    if dy <= dx {
        return (GestureState::PassThrough { origin }, Vec::new());
    }

    let away = ctx.anchor.away_displacement(origin.y, p.y);
    if away > 0.0 {
        (
            GestureState::Dragging {
                origin,
                offset: away,
            },
            vec![Effect::FollowDrag(away)],
        )
    } else if ctx.expandable {
        expanding(origin, -away, false, ctx)
    } else {
        (GestureState::PassThrough { origin }, Vec::new())
    }
}

fn expanding(
    origin: Point,
    pull: f32,
    was_revealed: bool,
    ctx: &GestureContext,
) -> (GestureState, Vec<Effect>) {
    let reply_height = pull.clamp(0.0, ctx.thresholds.max_reply_height);
    let revealed = was_revealed || reply_height >= ctx.thresholds.reveal;

    let mut effects = vec![Effect::SetReplyHeight(reply_height)];
    if revealed && !was_revealed {
        effects.push(Effect::RevealReply);
    }

    (
        GestureState::Expanding {
            origin,
            reply_height,
            revealed,
        },
        effects,
    )
}

fn exit(reason: ExitReason, mut effects: Vec<Effect>) -> (GestureState, Vec<Effect>) {
    effects.push(Effect::PlayExit(reason));
    (GestureState::Exiting { reason }, effects)
}

fn restart_timer(ctx: &GestureContext, effects: &mut Vec<Effect>) {
    if ctx.auto_dismiss {
        effects.push(Effect::StartAutoDismiss);
    }
}

/// A gesture state bundled with the constants it runs under.
#[derive(Debug, Clone)]
pub struct GestureMachine {
    state: GestureState,
    context: GestureContext,
}

impl GestureMachine {
    #[must_use]
    pub fn new(context: GestureContext) -> Self {
        Self {
            state: GestureState::Hidden,
            context,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    #[must_use]
    pub fn context(&self) -> &GestureContext {
        &self.context
    }

    /// Feeds an event and returns the resulting effects.
    pub fn handle(&mut self, event: GestureEvent) -> Vec<Effect> {
        let (next, effects) = transition(&self.state, event, &self.context);
        self.state = next;
        effects
    }
}
