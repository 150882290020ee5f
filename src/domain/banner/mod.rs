// SPDX-License-Identifier: MPL-2.0
//! Banner value objects.
//!
//! A [`BannerDescriptor`] is an immutable record describing one banner
//! instance. It is produced by the builders in the application layer and
//! never mutated afterwards.

mod descriptor;
mod hooks;
mod newtypes;
mod slot;

pub use descriptor::{
    Anchor, BannerDescriptor, BannerId, BannerKind, ColorSource, ReplyConfig, Rgba, Template,
    TextSource, Vibration,
};
pub use hooks::{Callback, Hook, Hooks, ImageLoaderFn, SubmitFn};
pub use newtypes::{queue_capacity_bounds, QueueCapacity};
pub use slot::{ImageSource, RemoteImage, Slot, SlotContent};
