// SPDX-License-Identifier: MPL-2.0
//! Haptic feedback port.

use std::time::Duration;

/// Device vibration.
pub trait Haptics {
    fn vibrate(&self, duration: Duration);
}
