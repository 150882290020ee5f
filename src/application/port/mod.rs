// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that presentation adapters
//! implement. These traits use only domain types, ensuring the coordinator
//! remains independent of the GUI toolkit.
//!
//! # Available Ports
//!
//! - [`presentation`]: Host screens and the surfaces they display
//! - [`haptics`]: Device vibration
//! - [`clock`]: Monotonic time source
//!
//! # Design Notes
//!
//! - No trait is `Send`: the coordinator lives on the UI thread
//! - Surfaces only animate; timing decisions stay in the coordinator
//! - The iced adapter lives in [`crate::ui::overlay`]

pub mod clock;
pub mod haptics;
pub mod presentation;

// Re-export main types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use haptics::Haptics;
pub use presentation::{
    Entrance, Exit, ExitStyle, Host, PresentationSurface, SurfaceError,
};
