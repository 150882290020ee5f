// SPDX-License-Identifier: MPL-2.0
//! Easing curves and time-based tweens for banner transitions.

use std::time::{Duration, Instant};

/// Easing curve applied to a progress value in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Decelerating; entrances and settles.
    #[default]
    EaseOut,
    /// Accelerating; exits.
    EaseIn,
    EaseInOut,
}

impl Easing {
    /// Applies the curve. Input is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseIn => t * t * t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// A value moving from `from` to `to` over `duration`, after `delay`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    delay: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A value that does not move.
    #[must_use]
    pub fn fixed(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            delay: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn new(from: f32, to: f32, now: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start: now,
            delay: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Holds `from` for `delay` before moving.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed < self.delay {
            return self.from;
        }
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (elapsed - self.delay).as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Final value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.delay + self.duration
    }

    /// Restarts toward `to` from wherever the value is at `now`.
    pub fn retarget(&mut self, to: f32, now: Instant, duration: Duration, easing: Easing) {
        *self = Self::new(self.value(now), to, now, duration, easing);
    }

    /// Jumps to `value` immediately.
    pub fn set(&mut self, value: f32, now: Instant) {
        *self = Self::fixed(value, now);
    }
}
