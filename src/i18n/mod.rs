// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for banner text.
//!
//! Banner titles, messages and reply labels may be given as Fluent keys;
//! this module resolves them from the embedded `.ftl` files.
//!
//! # Features
//!
//! - Locale detection from an explicit choice, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - `MISSING: key` marker when a translation is absent

pub mod fluent;

pub use fluent::I18n;
