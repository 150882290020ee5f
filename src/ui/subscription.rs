// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the banner overlay.
//!
//! Pointer and touch events are routed as [`PointerEvent`]s; the frame tick
//! only runs while something is on screen or waiting for a deadline.

use crate::application::coordinator::Coordinator;
use crate::ui::banner::{Message, PointerEvent};
use crate::ui::overlay::OverlayLayer;
use iced::{event, mouse, time, touch, window, Subscription};
use std::time::Duration;

/// Tick interval while banners are live (~60 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Subscriptions the application root batches with its own.
pub fn subscription(coordinator: &Coordinator, layer: &OverlayLayer) -> Subscription<Message> {
    let events = event::listen_with(|event, status, _window| route_event(&event, status));

    if coordinator.is_idle() && !layer.is_animating() {
        events
    } else {
        Subscription::batch([events, time::every(FRAME_INTERVAL).map(Message::Tick)])
    }
}

/// Maps a native event to a banner message.
///
/// Mouse buttons carry no position; they act at the last cursor position.
///
/// Presses captured by a widget (close button, reply input) never start a
/// gesture; motion and releases are always forwarded so a drag that crosses
/// a widget still ends.
#[must_use]
pub fn route_event(event: &event::Event, status: event::Status) -> Option<Message> {
    let pointer = match event {
        event::Event::Window(window::Event::Resized(size)) => {
            return Some(Message::Resized(*size));
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            if status == event::Status::Captured {
                return None;
            }
            PointerEvent::Pressed(None)
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            PointerEvent::Released(None)
        }
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            PointerEvent::Moved(*position)
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => PointerEvent::Lost,
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            if status == event::Status::Captured {
                return None;
            }
            PointerEvent::Pressed(Some(*position))
        }
        event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            PointerEvent::Moved(*position)
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            PointerEvent::Released(Some(*position))
        }
        event::Event::Touch(touch::Event::FingerLost { .. }) => PointerEvent::Lost,
        _ => return None,
    };
    Some(Message::Pointer(pointer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn finger() -> touch::Finger {
        touch::Finger(0)
    }

    #[test]
    fn captured_press_is_dropped() {
        let press = event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(route_event(&press, event::Status::Captured).is_none());
        assert!(matches!(
            route_event(&press, event::Status::Ignored),
            Some(Message::Pointer(PointerEvent::Pressed(None)))
        ));
    }

    #[test]
    fn captured_release_still_ends_gesture() {
        let release = event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert!(matches!(
            route_event(&release, event::Status::Captured),
            Some(Message::Pointer(PointerEvent::Released(None)))
        ));
    }

    #[test]
    fn touch_carries_position() {
        let position = Point::new(10.0, 20.0);
        let lifted = event::Event::Touch(touch::Event::FingerLifted {
            id: finger(),
            position,
        });
        assert!(matches!(
            route_event(&lifted, event::Status::Ignored),
            Some(Message::Pointer(PointerEvent::Released(Some(p)))) if p == position
        ));
    }

    #[test]
    fn resize_is_forwarded() {
        let size = Size::new(800.0, 600.0);
        let resized = event::Event::Window(window::Event::Resized(size));
        assert!(matches!(
            route_event(&resized, event::Status::Ignored),
            Some(Message::Resized(s)) if s == size
        ));
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let event = event::Event::Mouse(mouse::Event::CursorEntered);
        assert!(route_event(&event, event::Status::Ignored).is_none());
    }
}
