// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the banner system:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`coordinator`]: Show/replace/queue decisions and banner lifecycle
//! - [`builder`]: Immediate and pending banner builders
//! - [`pending`]: Cross-screen pending slot
//! - [`banners`]: Facade owned by the application root
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation layer implements application layer ports
//! - Nothing here knows about iced

pub mod banners;
pub mod builder;
pub mod callbacks;
pub mod coordinator;
pub mod pending;
pub mod port;
pub mod timers;

pub use banners::Banners;
pub use builder::{BannerBuilder, Builder, Configure, PendingBuilder, Side};
pub use coordinator::{BannerStatus, Coordinator, GestureInput};
pub use pending::{PendingBanner, PendingSlot};
