// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` shows transient, dismissible notification banners above an
//! Iced application's current screen.
//!
//! One banner is visible at a time. New requests replace it, or wait in a
//! small queue while it is still fresh, expanded or leaving. Banners can be
//! swiped away, tapped, and pulled open to type a reply. A pending slot hands
//! a banner over to the next screen.
//!
//! # Layers
//!
//! - [`domain`]: banner descriptors and the pure gesture state machine
//! - [`application`]: the lifecycle coordinator, builders, pending slot and ports
//! - [`ui`]: the Iced overlay implementing the presentation ports
//! - [`config`], [`i18n`], [`diagnostics`], [`error`]: ambient support

#![doc(html_root_url = "https://docs.rs/iced_banner/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

pub use application::{Banners, Builder, Configure, Coordinator};
pub use domain::banner::{BannerDescriptor, BannerId, BannerKind};
pub use error::{BannerError, Result};
