// SPDX-License-Identifier: MPL-2.0
//! Domain layer - banner values and the gesture state machine.
//!
//! Nothing in here touches the GUI toolkit. Types are plain values that the
//! application layer moves between the coordinator, the pending slot and
//! the presentation ports.
//!
//! # Modules
//!
//! - [`banner`]: Banner descriptor and its value objects
//!   ([`BannerDescriptor`](banner::BannerDescriptor), [`BannerKind`](banner::BannerKind),
//!   [`QueueCapacity`](banner::QueueCapacity))
//! - [`gesture`]: Pure gesture transition function
//!   ([`GestureState`](gesture::GestureState), [`transition`](gesture::transition))
//! - [`queue`]: Bounded rotating queue ([`RotatingQueue`](queue::RotatingQueue))

pub mod banner;
pub mod gesture;
pub mod queue;
