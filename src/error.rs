// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.

use thiserror::Error;

/// Errors reported by the banner system.
///
/// Payloads are plain strings so the error stays `Clone` and can travel
/// through iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BannerError {
    /// An operation was called on a builder in the wrong mode.
    #[error("invalid builder state: {0}")]
    StateViolation(&'static str),

    /// A pending banner was scheduled without any message.
    #[error("banner has no message")]
    MissingMessage,

    #[error("io error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),
}

impl BannerError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            BannerError::StateViolation(_) => "banner-error-state",
            BannerError::MissingMessage => "banner-error-missing-message",
            BannerError::Io(_) | BannerError::Config(_) => "banner-config-load-error",
        }
    }
}

impl From<std::io::Error> for BannerError {
    fn from(err: std::io::Error) -> Self {
        BannerError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for BannerError {
    fn from(err: toml::de::Error) -> Self {
        BannerError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for BannerError {
    fn from(err: toml::ser::Error) -> Self {
        BannerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BannerError>;
