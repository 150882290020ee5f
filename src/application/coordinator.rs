// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle coordinator.
//!
//! The coordinator owns the single current-banner slot, the bounded pending
//! queue and every deadline of the banner system. It decides for each show
//! request whether to display it, replace the current banner with it or
//! queue it, and it drives the gesture machine of each live banner.
//!
//! # Show decision
//!
//! | Situation                                   | Decision                     |
//! |---------------------------------------------|------------------------------|
//! | Host gone                                   | dropped                      |
//! | Nothing shown, queue empty                  | shown immediately            |
//! | Nothing shown, queue waiting for its gap    | queued                       |
//! | Current banner leaving or expanded          | queued until it is dismissed |
//! | Current banner shown for less than min time | queued, retried later        |
//! | Otherwise                                   | replaces the current banner  |
//!
//! Time only moves through [`Coordinator::tick`], which fires due deadlines
//! and then runs the callbacks collected along the way.

use crate::application::callbacks::DeferredCallbacks;
use crate::application::port::{
    Clock, Entrance, Exit, ExitStyle, Haptics, Host, PresentationSurface, SystemClock,
};
use crate::application::timers::{TimerKey, TimerSet};
use crate::config::{Settings, Timing};
use crate::diagnostics::{BannerEvent, CallbackKind, DiagnosticsHandle, DropReason};
use crate::domain::banner::{BannerDescriptor, BannerId};
use crate::domain::gesture::{
    Effect, ExitReason, GestureContext, GestureEvent, GestureMachine, GestureState, Point,
};
use crate::domain::queue::RotatingQueue;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Upper bound of timer rounds handled by one tick. Zero-length transitions
/// arm timers that are due immediately.
const MAX_TIMER_ROUNDS: usize = 16;

/// Pointer input routed to the current banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel,
}

impl From<GestureInput> for GestureEvent {
    fn from(input: GestureInput) -> Self {
        match input {
            GestureInput::Down(p) => GestureEvent::TouchDown(p),
            GestureInput::Move(p) => GestureEvent::TouchMove(p),
            GestureInput::Up(p) => GestureEvent::TouchUp(p),
            GestureInput::Cancel => GestureEvent::TouchCancel,
        }
    }
}

/// Where a request stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStatus {
    /// Waiting in the pending queue.
    Queued,
    Entering,
    /// On screen and idle.
    Visible,
    /// A finger is on the banner.
    Interacting,
    /// The reply area is open or being pulled open.
    Expanded,
    Exiting,
    /// Dismissed, dropped, evicted or never known.
    Gone,
}

impl From<&GestureState> for BannerStatus {
    fn from(state: &GestureState) -> Self {
        match state {
            GestureState::Hidden | GestureState::Entering => BannerStatus::Entering,
            GestureState::Visible => BannerStatus::Visible,
            GestureState::Pressed { .. }
            | GestureState::Dragging { .. }
            | GestureState::PassThrough { .. } => BannerStatus::Interacting,
            GestureState::Expanding { .. } | GestureState::Expanded => BannerStatus::Expanded,
            GestureState::Exiting { .. } => BannerStatus::Exiting,
            GestureState::Dismissed => BannerStatus::Gone,
        }
    }
}

/// A request waiting for its turn.
struct QueuedRequest {
    id: BannerId,
    host: Rc<dyn Host>,
    descriptor: BannerDescriptor,
}

/// A banner with a surface on screen.
struct LiveBanner {
    id: BannerId,
    descriptor: BannerDescriptor,
    machine: GestureMachine,
    surface: Box<dyn PresentationSurface>,
    shown_at: Instant,
}

enum Decision {
    Drop,
    Show,
    Replace,
    /// Queue the request; `arm` schedules a retry.
    Enqueue { arm: bool },
}

/// Coordinator work requested by a transition.
enum FollowUp {
    Shown,
    Collapsed,
    Finalize(ExitReason),
}

/// Owner of the banner lifecycle. Lives on the UI thread.
pub struct Coordinator {
    settings: Settings,
    clock: Rc<dyn Clock>,
    haptics: Option<Box<dyn Haptics>>,
    diagnostics: Option<DiagnosticsHandle>,
    current: Option<LiveBanner>,
    /// Replaced banners finishing their exit.
    retiring: Vec<LiveBanner>,
    queue: RotatingQueue<QueuedRequest>,
    timers: TimerSet,
    callbacks: DeferredCallbacks,
    last_show: Option<Instant>,
}

impl Coordinator {
    /// Creates a coordinator driven by the system clock.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, Rc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(settings: Settings, clock: Rc<dyn Clock>) -> Self {
        Self {
            queue: RotatingQueue::new(settings.queue_capacity),
            settings,
            clock,
            haptics: None,
            diagnostics: None,
            current: None,
            retiring: Vec::new(),
            timers: TimerSet::new(),
            callbacks: DeferredCallbacks::new(),
            last_show: None,
        }
    }

    #[must_use]
    pub fn with_haptics(mut self, haptics: Box<dyn Haptics>) -> Self {
        self.haptics = Some(haptics);
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Asks for `descriptor` to be shown on `host`.
    ///
    /// The returned id identifies the request whatever happens to it; use
    /// [`Coordinator::status`] to follow it.
    pub fn request_show(&mut self, host: Rc<dyn Host>, descriptor: BannerDescriptor) -> BannerId {
        let id = BannerId::new();
        self.route(
            QueuedRequest {
                id,
                host,
                descriptor,
            },
            false,
        );
        self.flush_callbacks();
        id
    }

    /// Asks the current banner to leave. No-op when nothing is shown.
    pub fn dismiss_current(&mut self) {
        if let Some(id) = self.current.as_ref().map(|banner| banner.id) {
            self.dispatch(id, GestureEvent::CloseRequested);
            self.flush_callbacks();
        }
    }

    /// Closes a live banner or withdraws a queued request.
    ///
    /// Returns whether the id was known.
    pub fn close(&mut self, id: BannerId) -> bool {
        if self.is_live(id) {
            self.dispatch(id, GestureEvent::CloseRequested);
            self.flush_callbacks();
            return true;
        }
        let removed = self.queue.remove_where(|request| request.id == id) > 0;
        if removed {
            self.log(BannerEvent::Dropped {
                id: id.value(),
                reason: DropReason::Cleared,
            });
            if self.queue.is_empty() {
                self.timers.cancel(TimerKey::ProcessQueue);
            }
        }
        removed
    }

    /// Routes pointer input to the current banner.
    ///
    /// Returns whether a banner received it.
    pub fn handle_gesture(&mut self, input: GestureInput) -> bool {
        let Some(id) = self.current.as_ref().map(|banner| banner.id) else {
            return false;
        };
        self.dispatch(id, input.into());
        self.flush_callbacks();
        true
    }

    /// Submits reply text from the current banner's input.
    pub fn submit_reply(&mut self, text: impl Into<String>) {
        if let Some(id) = self.current.as_ref().map(|banner| banner.id) {
            self.dispatch(id, GestureEvent::Submit(text.into()));
            self.flush_callbacks();
        }
    }

    /// Withdraws every queued request. Returns how many were removed.
    pub fn clear_queue(&mut self) -> usize {
        let ids: Vec<BannerId> = self.queue.drain().map(|request| request.id).collect();
        for id in &ids {
            self.log(BannerEvent::Dropped {
                id: id.value(),
                reason: DropReason::Cleared,
            });
        }
        self.timers.cancel(TimerKey::ProcessQueue);
        ids.len()
    }

    /// Tears everything down without transitions.
    ///
    /// Used when the host screen goes away. Dismissal callbacks still run.
    pub fn shutdown(&mut self) {
        self.clear_queue();
        self.timers.clear();
        let ids: Vec<BannerId> = self
            .current
            .iter()
            .chain(self.retiring.iter())
            .map(|banner| banner.id)
            .collect();
        for id in ids {
            self.finalize(id, ExitReason::Shutdown);
        }
        self.flush_callbacks();
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Fires every due deadline, then runs pending callbacks.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        for _ in 0..MAX_TIMER_ROUNDS {
            let due = self.timers.take_due(now);
            if due.is_empty() {
                break;
            }
            for key in due {
                self.fire(key);
            }
        }
        self.flush_callbacks();
    }

    /// Runs the callbacks collected so far.
    pub fn flush_callbacks(&mut self) {
        self.callbacks.flush(self.diagnostics.as_ref());
    }

    /// Earliest armed deadline, for scheduling the next tick.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn status(&self, id: BannerId) -> BannerStatus {
        if let Some(banner) = self.live(id) {
            return BannerStatus::from(banner.machine.state());
        }
        if self.queue.iter().any(|request| request.id == id) {
            return BannerStatus::Queued;
        }
        BannerStatus::Gone
    }

    /// Id of the banner owning the current slot.
    #[must_use]
    pub fn current(&self) -> Option<BannerId> {
        self.current.as_ref().map(|banner| banner.id)
    }

    /// Gesture state of a live banner.
    #[must_use]
    pub fn gesture_state(&self, id: BannerId) -> Option<&GestureState> {
        self.live(id).map(|banner| banner.machine.state())
    }

    /// When the auto-dismiss countdown of `id` runs out, if it is running.
    #[must_use]
    pub fn auto_dismiss_deadline(&self, id: BannerId) -> Option<Instant> {
        self.timers.deadline(TimerKey::AutoDismiss(id))
    }

    /// Banners not yet leaving.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.current
            .iter()
            .chain(self.retiring.iter())
            .filter(|banner| !banner.machine.state().is_exiting())
            .count()
    }

    /// Surfaces currently attached, leaving banners included.
    #[must_use]
    pub fn live_count(&self) -> usize {
        usize::from(self.current.is_some()) + self.retiring.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// When the current banner's entrance began.
    #[must_use]
    pub fn last_show(&self) -> Option<Instant> {
        self.last_show
    }

    /// Nothing shown, queued or pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
            && self.retiring.is_empty()
            && self.queue.is_empty()
            && self.timers.is_empty()
            && self.callbacks.is_empty()
    }

    // =========================================================================
    // Decision
    // =========================================================================

    fn decide(&self, host: &dyn Host, from_queue: bool, now: Instant) -> Decision {
        if !host.is_available() {
            return Decision::Drop;
        }

        let Some(current) = &self.current else {
            if !from_queue && !self.queue.is_empty() {
                return Decision::Enqueue {
                    arm: !self.timers.is_armed(TimerKey::ProcessQueue),
                };
            }
            return Decision::Show;
        };

        let state = current.machine.state();
        if state.is_exiting() || state.is_dismissed() || state.is_expanded() {
            return Decision::Enqueue { arm: false };
        }
        if now.saturating_duration_since(current.shown_at) < self.settings.timing.min_display {
            return Decision::Enqueue { arm: true };
        }
        Decision::Replace
    }

    fn route(&mut self, request: QueuedRequest, from_queue: bool) {
        let now = self.clock.now();
        match self.decide(request.host.as_ref(), from_queue, now) {
            Decision::Drop => self.drop_request(request.id, DropReason::HostUnavailable),
            Decision::Show => {
                self.display(request, Duration::ZERO);
            }
            Decision::Replace => self.replace(request),
            Decision::Enqueue { arm } => {
                self.enqueue(request, from_queue);
                if arm {
                    self.arm_queue_processing(now);
                }
            }
        }
    }

    fn enqueue(&mut self, request: QueuedRequest, at_front: bool) {
        let id = request.id;
        if at_front {
            if let Err(request) = self.queue.push_front(request) {
                self.drop_request(request.id, DropReason::Cleared);
                return;
            }
        } else if let Some(evicted) = self.queue.push(request) {
            tracing::debug!(
                evicted = evicted.id.value(),
                "banner queue full, evicting oldest request"
            );
            self.log(BannerEvent::Evicted {
                id: evicted.id.value(),
            });
        }
        tracing::debug!(banner = id.value(), queued = self.queue.len(), "banner queued");
        self.log(BannerEvent::Queued {
            id: id.value(),
            queue_len: self.queue.len(),
        });
    }

    /// Schedules queue processing once the current banner has been up for
    /// the minimum display time, plus the transition gap.
    fn arm_queue_processing(&mut self, now: Instant) {
        if self.queue.is_empty() {
            return;
        }
        let timing = self.settings.timing;
        let remaining = self.current.as_ref().map_or(Duration::ZERO, |banner| {
            timing
                .min_display
                .saturating_sub(now.saturating_duration_since(banner.shown_at))
        });
        self.timers.schedule(
            TimerKey::ProcessQueue,
            now + remaining + timing.transition_gap,
        );
    }

    fn process_queue(&mut self) {
        while let Some(request) = self.queue.pop_front() {
            let now = self.clock.now();
            match self.decide(request.host.as_ref(), true, now) {
                Decision::Drop => {
                    self.drop_request(request.id, DropReason::HostUnavailable);
                    continue;
                }
                Decision::Show => {
                    self.display(request, Duration::ZERO);
                }
                Decision::Replace => self.replace(request),
                Decision::Enqueue { arm } => {
                    self.enqueue(request, true);
                    if arm {
                        self.arm_queue_processing(now);
                    }
                }
            }
            return;
        }
    }

    fn drop_request(&mut self, id: BannerId, reason: DropReason) {
        tracing::debug!(banner = id.value(), reason = ?reason, "banner request dropped");
        self.log(BannerEvent::Dropped {
            id: id.value(),
            reason,
        });
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Attaches a surface for `request` and makes it the current banner.
    ///
    /// Returns false when the request had to be dropped.
    fn display(&mut self, request: QueuedRequest, content_delay: Duration) -> bool {
        let QueuedRequest {
            id,
            host,
            descriptor,
        } = request;

        if !host.is_available() {
            self.drop_request(id, DropReason::HostUnavailable);
            return false;
        }

        let mut surface = match host.create_surface(id, &descriptor) {
            Ok(surface) => surface,
            Err(err) => {
                tracing::warn!(banner = id.value(), error = %err, "failed to create banner surface");
                self.drop_request(id, DropReason::SurfaceFailed);
                return false;
            }
        };
        let entrance = Entrance {
            anchor: descriptor.anchor(),
            duration: self.settings.timing.entrance,
            content_delay,
            content_fade: self.settings.timing.content_fade_in,
        };
        if let Err(err) = surface.show(entrance) {
            tracing::warn!(banner = id.value(), error = %err, "failed to show banner surface");
            surface.teardown();
            self.drop_request(id, DropReason::SurfaceFailed);
            return false;
        }

        if let (Some(haptics), Some(duration)) = (&self.haptics, descriptor.vibration().duration())
        {
            haptics.vibrate(duration);
        }

        let context = GestureContext {
            anchor: descriptor.anchor(),
            expandable: descriptor.is_expandable(),
            auto_dismiss: descriptor.has_auto_dismiss(),
            thresholds: self.settings.gesture,
        };
        let now = self.clock.now();
        tracing::debug!(banner = id.value(), kind = ?descriptor.kind(), "showing banner");
        self.log(BannerEvent::Shown {
            id: id.value(),
            kind: descriptor.kind(),
        });

        self.current = Some(LiveBanner {
            id,
            descriptor,
            machine: GestureMachine::new(context),
            surface,
            shown_at: now,
        });
        self.last_show = Some(now);
        self.dispatch(id, GestureEvent::Displayed);
        true
    }

    /// Shows `request` in place of the current banner.
    ///
    /// The incoming banner enters first with its content held back; the
    /// outgoing one then shrinks to the incoming height, hides its content
    /// and fades out.
    fn replace(&mut self, request: QueuedRequest) {
        let Some(mut old) = self.current.take() else {
            self.display(request, Duration::ZERO);
            return;
        };

        let new_id = request.id;
        let timing = self.settings.timing;
        if !self.display(request, timing.content_reveal_delay) {
            self.current = Some(old);
            return;
        }

        let height = self
            .current
            .as_ref()
            .map_or(0.0, |banner| banner.surface.measured_height());
        old.surface.resize(height, timing.replace);
        old.surface.fade_content(0.0, timing.replace_content_fade);

        let old_id = old.id;
        self.retiring.push(old);
        tracing::debug!(banner = old_id.value(), by = new_id.value(), "banner replaced");
        self.log(BannerEvent::Replaced {
            id: old_id.value(),
            by: new_id.value(),
        });
        self.dispatch(old_id, GestureEvent::Superseded);
    }

    // =========================================================================
    // Gesture machine plumbing
    // =========================================================================

    fn fire(&mut self, key: TimerKey) {
        match key {
            TimerKey::Entrance(id) => self.dispatch(id, GestureEvent::EntranceFinished),
            TimerKey::AutoDismiss(id) => self.dispatch(id, GestureEvent::AutoDismissElapsed),
            TimerKey::Exit(id) => self.dispatch(id, GestureEvent::ExitFinished),
            TimerKey::ProcessQueue => self.process_queue(),
        }
    }

    /// Feeds `event` to a live banner and carries out the effects.
    fn dispatch(&mut self, id: BannerId, event: GestureEvent) {
        let now = self.clock.now();
        let timing = self.settings.timing;
        let mut follow_ups = Vec::new();

        let banner = match self.current.as_mut() {
            Some(banner) if banner.id == id => banner,
            _ => match self.retiring.iter_mut().find(|banner| banner.id == id) {
                Some(banner) => banner,
                None => return,
            },
        };

        for effect in banner.machine.handle(event) {
            match effect {
                Effect::PlayEntrance => self
                    .timers
                    .schedule(TimerKey::Entrance(id), now + timing.entrance),
                Effect::StartAutoDismiss => self.timers.schedule(
                    TimerKey::AutoDismiss(id),
                    now + banner.descriptor.duration(),
                ),
                Effect::CancelAutoDismiss => {
                    self.timers.cancel(TimerKey::AutoDismiss(id));
                }
                Effect::NotifyShown => follow_ups.push(FollowUp::Shown),
                Effect::InvokeShowComplete => self.callbacks.push(
                    id,
                    CallbackKind::ShowComplete,
                    banner.descriptor.hooks().on_show_complete.as_ref(),
                ),
                Effect::InvokeClick => {
                    self.callbacks
                        .push(id, CallbackKind::Click, banner.descriptor.on_click());
                }
                Effect::FollowDrag(offset) => banner.surface.follow_drag(offset),
                Effect::SettleToRest => banner.surface.settle(timing.exit),
                Effect::SetReplyHeight(height) => banner.surface.set_reply_height(height),
                Effect::RevealReply => banner.surface.reveal_reply(),
                Effect::ExpandReply => banner.surface.expand_reply(timing.reply_snap),
                Effect::CollapseReply => {
                    banner.surface.collapse_reply(timing.reply_snap);
                    follow_ups.push(FollowUp::Collapsed);
                }
                Effect::FocusInput => banner.surface.set_input_focus(true),
                Effect::ReleaseFocus => banner.surface.set_input_focus(false),
                Effect::ClearInput => banner.surface.clear_input(),
                Effect::InvokeSubmit(text) => {
                    self.callbacks
                        .push_submit(id, banner.descriptor.reply().on_submit(), text);
                }
                Effect::PlayExit(reason) => {
                    let exit = exit_for(reason, &timing);
                    banner.surface.dismiss(exit);
                    self.timers.schedule(TimerKey::Exit(id), now + exit.duration);
                }
                Effect::Finalize(reason) => follow_ups.push(FollowUp::Finalize(reason)),
            }
        }
        let at_rest = *banner.machine.state() == GestureState::Visible;

        for follow_up in follow_ups {
            match follow_up {
                FollowUp::Shown => self.arm_queue_processing(now),
                FollowUp::Collapsed if at_rest => self.arm_queue_processing(now),
                FollowUp::Collapsed => {}
                FollowUp::Finalize(reason) => self.finalize(id, reason),
            }
        }
    }

    /// The single dismissal routine every terminal path ends in.
    fn finalize(&mut self, id: BannerId, reason: ExitReason) {
        self.timers.cancel_banner(id);

        let was_current = self.current.as_ref().is_some_and(|banner| banner.id == id);
        let banner = if was_current {
            self.current.take()
        } else {
            self.retiring
                .iter()
                .position(|banner| banner.id == id)
                .map(|index| self.retiring.remove(index))
        };
        let Some(mut banner) = banner else {
            return;
        };

        banner.surface.teardown();
        let hooks = banner.descriptor.hooks();
        self.callbacks
            .push(id, CallbackKind::Dismiss, hooks.on_dismiss.as_ref());
        self.callbacks.push(
            id,
            CallbackKind::DismissComplete,
            hooks.on_dismiss_complete.as_ref(),
        );

        tracing::debug!(banner = id.value(), reason = ?reason, "banner dismissed");
        self.log(BannerEvent::Dismissed {
            id: id.value(),
            reason,
        });

        if was_current && !self.queue.is_empty() {
            let now = self.clock.now();
            self.timers.schedule(
                TimerKey::ProcessQueue,
                now + self.settings.timing.transition_gap,
            );
        }
    }

    fn live(&self, id: BannerId) -> Option<&LiveBanner> {
        self.current
            .iter()
            .chain(self.retiring.iter())
            .find(|banner| banner.id == id)
    }

    fn is_live(&self, id: BannerId) -> bool {
        self.live(id).is_some()
    }

    fn log(&self, event: BannerEvent) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log(event);
        }
    }
}

fn exit_for(reason: ExitReason, timing: &Timing) -> Exit {
    match reason {
        ExitReason::Submitted => Exit {
            style: ExitStyle::RollUp,
            duration: timing.roll_up,
        },
        ExitReason::Replaced => Exit {
            style: ExitStyle::Fade,
            duration: timing.replace,
        },
        ExitReason::Shutdown => Exit {
            style: ExitStyle::Slide,
            duration: Duration::ZERO,
        },
        ExitReason::Timeout | ExitReason::Manual | ExitReason::Swipe => Exit {
            style: ExitStyle::Slide,
            duration: timing.exit,
        },
    }
}
