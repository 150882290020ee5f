// SPDX-License-Identifier: MPL-2.0
//! End-to-end banner flows through the Iced overlay host.

use iced::{Point, Size};
use iced_banner::application::port::{Clock, ManualClock};
use iced_banner::application::{BannerStatus, Banners, Configure, Coordinator, Side};
use iced_banner::config::Settings;
use iced_banner::diagnostics::{BannerEvent, DiagnosticsCollector};
use iced_banner::domain::banner::{BannerKind, Hook};
use iced_banner::ui::banner::{self, Message, PointerEvent};
use iced_banner::ui::design_tokens::spacing;
use iced_banner::ui::overlay::{OverlayLayer, SlotView};
use iced_banner::BannerId;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const STEP: Duration = Duration::from_millis(10);

struct Harness {
    clock: Rc<ManualClock>,
    layer: OverlayLayer,
    banners: Banners,
    collector: DiagnosticsCollector,
}

impl Harness {
    fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let clock = Rc::new(ManualClock::new());
        let collector = DiagnosticsCollector::new(128);
        let coordinator = Coordinator::with_clock(Settings::default(), clock.clone())
            .with_diagnostics(collector.handle());
        let layer = OverlayLayer::with_clock(clock.clone());
        layer.set_viewport(Size::new(420.0, 900.0));

        Self {
            clock,
            layer,
            banners: Banners::from_coordinator(coordinator),
            collector,
        }
    }

    /// Moves time forward in frame-sized steps, ticking like the app would.
    fn advance(&mut self, ms: u64) {
        let mut left = Duration::from_millis(ms);
        while !left.is_zero() {
            let step = left.min(STEP);
            self.clock.advance(step);
            self.banners.tick();
            left -= step;
        }
    }

    fn show(&mut self, message: &str) -> BannerId {
        self.banners
            .show(self.layer.host(), BannerKind::Info, message, None)
    }

    fn send(&mut self, message: Message) {
        banner::update(self.banners.coordinator_mut(), &self.layer, message);
    }

    fn pointer(&mut self, event: PointerEvent) {
        self.send(Message::Pointer(event));
    }

    /// Presses on the banner, drags vertically by `dy` and releases.
    fn drag(&mut self, dy: f32) {
        let start = Point::new(210.0, spacing::MD + 30.0);
        let end = Point::new(start.x, start.y + dy);
        self.pointer(PointerEvent::Moved(start));
        self.pointer(PointerEvent::Pressed(None));
        self.pointer(PointerEvent::Moved(Point::new(start.x, start.y + dy / 2.0)));
        self.pointer(PointerEvent::Moved(end));
        self.pointer(PointerEvent::Released(None));
    }

    fn shown(&mut self) -> Vec<u64> {
        self.collector.process_pending();
        self.collector
            .events()
            .filter_map(|event| match event {
                BannerEvent::Shown { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

#[test]
fn rapid_requests_keep_first_and_last() {
    let mut h = Harness::new();

    let a = h.show("A");
    h.advance(300);
    let b = h.show("B");
    h.advance(300);
    let c = h.show("C");
    h.advance(300);
    let d = h.show("D");
    h.advance(200);

    assert_eq!(h.shown(), vec![a.value(), d.value()]);
    assert_eq!(h.banners.coordinator().status(b), BannerStatus::Gone);
    assert_eq!(h.banners.coordinator().status(c), BannerStatus::Gone);
    assert_eq!(h.banners.coordinator().current(), Some(d));
    assert_eq!(h.banners.coordinator().status(a), BannerStatus::Exiting);

    // The replaced banner leaves once its crossfade is over.
    h.advance(400);
    assert_eq!(h.banners.coordinator().status(a), BannerStatus::Gone);
    assert_eq!(h.layer.surface_count(), 1);
}

#[test]
fn short_swipe_bounces_back_and_long_swipe_dismisses() {
    let mut h = Harness::new();
    let id = h.show("Swipe");
    h.advance(400);

    h.drag(-50.0);
    assert_eq!(h.banners.coordinator().status(id), BannerStatus::Visible);
    let deadline = h
        .banners
        .coordinator()
        .auto_dismiss_deadline(id)
        .expect("timer restarted");
    assert_eq!(deadline - h.clock.now(), Duration::from_secs(3));

    // Let it settle back under the pointer.
    h.advance(300);
    h.drag(-150.0);
    assert_eq!(h.banners.coordinator().status(id), BannerStatus::Exiting);
    h.advance(400);
    assert_eq!(h.banners.coordinator().status(id), BannerStatus::Gone);
    assert!(h.layer.frames().is_empty());
}

#[test]
fn pull_open_and_reply() {
    let mut h = Harness::new();
    let replies = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&replies);
    let id = h
        .banners
        .make(h.layer.host())
        .title("Alex")
        .message("Dinner tonight?")
        .expandable(true)
        .on_submit(move |text| sink.lock().expect("lock").push(text.to_string()))
        .show();
    h.advance(400);

    h.drag(160.0);
    assert_eq!(h.banners.coordinator().status(id), BannerStatus::Expanded);
    assert!(h.banners.coordinator().auto_dismiss_deadline(id).is_none());
    let frame = h.layer.frame(id).expect("frame");
    assert!(frame.reply_visible && frame.focused);

    // Blank text is ignored.
    h.send(Message::InputChanged("   ".into()));
    h.send(Message::Submit);
    assert_eq!(h.banners.coordinator().status(id), BannerStatus::Expanded);

    h.send(Message::InputChanged("On my way".into()));
    h.send(Message::Submit);
    h.send(Message::Submit);
    assert_eq!(*replies.lock().expect("lock"), vec!["On my way".to_string()]);
    assert_eq!(h.layer.input(), "");
    assert_eq!(h.banners.coordinator().status(id), BannerStatus::Exiting);
}

#[test]
fn requests_wait_while_expanded() {
    let mut h = Harness::new();
    let first = h
        .banners
        .make(h.layer.host())
        .message("Reply to me")
        .expandable(true)
        .show();
    h.advance(400);
    h.drag(160.0);

    let second = h.show("Later");
    h.advance(5000);
    assert_eq!(h.banners.coordinator().status(second), BannerStatus::Queued);

    h.banners.dismiss_current();
    h.advance(600);
    assert_eq!(h.banners.coordinator().status(first), BannerStatus::Gone);
    assert_ne!(h.banners.coordinator().status(second), BannerStatus::Queued);
    assert_eq!(h.banners.coordinator().current(), Some(second));
}

#[test]
fn tap_invokes_click() {
    let mut h = Harness::new();
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);
    h.banners
        .make(h.layer.host())
        .message("Open chat")
        .on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .show();
    h.advance(400);

    h.drag(0.0);
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn pending_banner_crosses_screens() {
    let mut h = Harness::new();

    h.banners
        .schedule_pending("editor")
        .message("Draft discarded")
        .schedule()
        .expect("has message");
    h.banners
        .schedule_pending("editor")
        .message("Changes saved")
        .schedule()
        .expect("has message");

    let next_screen = OverlayLayer::with_clock(h.clock.clone());
    assert!(h.banners.show_pending_if_available(next_screen.host()));
    assert!(!h.banners.show_pending_if_available(next_screen.host()));
    h.advance(400);

    let frames = next_screen.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(
        frames[0].descriptor.message_literal(),
        Some("Changes saved")
    );
    assert!(h.layer.frames().is_empty());
}

#[test]
fn closed_screen_drops_requests() {
    let mut h = Harness::new();
    h.layer.set_available(false);
    let id = h.show("Nobody sees this");
    assert_eq!(h.banners.coordinator().status(id), BannerStatus::Gone);
    assert!(h.shown().is_empty());
}

#[test]
fn shutdown_runs_dismiss_callbacks() {
    let mut h = Harness::new();
    let dismissed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&dismissed);
    h.banners
        .make(h.layer.host())
        .message("Bye")
        .on_dismiss(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .show();
    h.advance(100);

    h.banners.coordinator_mut().shutdown();
    assert_eq!(dismissed.load(Ordering::SeqCst), 1);
    assert_eq!(h.layer.surface_count(), 0);
    assert!(h.banners.coordinator().is_idle());
}

#[test]
fn diagnostics_export_as_json() {
    let mut h = Harness::new();
    h.show("Logged");
    h.advance(100);
    h.collector.process_pending();

    let json = h.collector.export_json().expect("serializable");
    let report: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(report["event_count"], 1);
    assert_eq!(report["events"][0]["event"], "shown");
}

#[test]
fn broken_image_loader_still_shows_the_banner() {
    let mut h = Harness::new();
    let id = h
        .banners
        .make(h.layer.host())
        .message("New avatar")
        .image_url(
            Side::Left,
            "https://example.invalid/avatar.png",
            Hook::loader(|_| panic!("decoder crashed")),
        )
        .show();
    h.advance(400);

    assert_eq!(h.banners.coordinator().status(id), BannerStatus::Visible);
    let frame = h.layer.frame(id).expect("frame");
    assert_eq!(frame.left, SlotView::Icon);
}
