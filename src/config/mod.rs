// SPDX-License-Identifier: MPL-2.0
//! Banner configuration, loaded from and saved to a `banner.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language used for localized banner strings
//! - `[timing]` - Display floor and transition choreography
//! - `[gesture]` - Touch slop and release thresholds
//! - `[queue]` - Pending request capacity
//!
//! Every field is optional; missing fields fall back to [`defaults`].
//! The file form is converted into runtime [`Settings`] with
//! [`Config::settings`], which clamps out-of-range values.
//!
//! # Examples
//!
//! ```no_run
//! use iced_banner::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow down back-to-back notifications
//! config.timing.min_display_ms = Some(1500);
//!
//! config::save(&config).expect("Failed to save config");
//! let settings = config.settings();
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::banner::QueueCapacity;
use crate::domain::gesture::GestureThresholds;
use crate::error::{BannerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "banner.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Timing of the banner lifecycle, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_display_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_gap_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_up_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_content_fade_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_reveal_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_fade_in_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_snap_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_display_ms: Some(DEFAULT_MIN_DISPLAY_MS),
            transition_gap_ms: Some(DEFAULT_TRANSITION_GAP_MS),
            entrance_ms: Some(DEFAULT_ENTRANCE_MS),
            exit_ms: Some(DEFAULT_EXIT_MS),
            roll_up_ms: Some(DEFAULT_ROLL_UP_MS),
            replace_ms: Some(DEFAULT_REPLACE_MS),
            replace_content_fade_ms: Some(DEFAULT_REPLACE_CONTENT_FADE_MS),
            content_reveal_delay_ms: Some(DEFAULT_CONTENT_REVEAL_DELAY_MS),
            content_fade_in_ms: Some(DEFAULT_CONTENT_FADE_IN_MS),
            reply_snap_ms: Some(DEFAULT_REPLY_SNAP_MS),
        }
    }
}

/// Gesture thresholds, in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch_slop: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss_threshold: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand_snap_threshold: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_reveal_threshold: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_reply_height: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: Some(DEFAULT_TOUCH_SLOP),
            dismiss_threshold: Some(DEFAULT_DISMISS_THRESHOLD),
            expand_snap_threshold: Some(DEFAULT_EXPAND_SNAP_THRESHOLD),
            reply_reveal_threshold: Some(DEFAULT_REPLY_REVEAL_THRESHOLD),
            max_reply_height: Some(DEFAULT_MAX_REPLY_HEIGHT),
        }
    }
}

/// Pending queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<usize>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_size: Some(DEFAULT_QUEUE_SIZE),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Banner configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub queue: QueueConfig,
}

// =============================================================================
// Runtime Settings
// =============================================================================

/// Validated timing values used by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub min_display: Duration,
    pub transition_gap: Duration,
    pub entrance: Duration,
    pub exit: Duration,
    pub roll_up: Duration,
    pub replace: Duration,
    pub replace_content_fade: Duration,
    pub content_reveal_delay: Duration,
    pub content_fade_in: Duration,
    pub reply_snap: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        TimingConfig::default().resolve()
    }
}

/// Runtime settings of the banner system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    pub timing: Timing,
    pub gesture: GestureThresholds,
    pub queue_capacity: QueueCapacity,
}

fn clamp_ms(value: Option<u64>, default: u64, max: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default).min(max))
}

fn clamp_px(value: Option<f32>, default: f32) -> f32 {
    let value = value.unwrap_or(default);
    if value.is_finite() {
        value.clamp(0.0, MAX_GESTURE_DISTANCE)
    } else {
        default
    }
}

impl TimingConfig {
    /// Converts to validated durations.
    ///
    /// The incoming content reveal is pushed past the outgoing content fade
    /// so two banners never show full content at once.
    #[must_use]
    pub fn resolve(&self) -> Timing {
        let replace_content_fade = clamp_ms(
            self.replace_content_fade_ms,
            DEFAULT_REPLACE_CONTENT_FADE_MS,
            MAX_TRANSITION_MS,
        );
        let content_reveal_delay = clamp_ms(
            self.content_reveal_delay_ms,
            DEFAULT_CONTENT_REVEAL_DELAY_MS,
            MAX_TRANSITION_MS,
        )
        .max(replace_content_fade + Duration::from_millis(MIN_REVEAL_MARGIN_MS));

        Timing {
            min_display: clamp_ms(
                self.min_display_ms,
                DEFAULT_MIN_DISPLAY_MS,
                MAX_MIN_DISPLAY_MS,
            ),
            transition_gap: clamp_ms(
                self.transition_gap_ms,
                DEFAULT_TRANSITION_GAP_MS,
                MAX_TRANSITION_MS,
            ),
            entrance: clamp_ms(self.entrance_ms, DEFAULT_ENTRANCE_MS, MAX_TRANSITION_MS),
            exit: clamp_ms(self.exit_ms, DEFAULT_EXIT_MS, MAX_TRANSITION_MS),
            roll_up: clamp_ms(self.roll_up_ms, DEFAULT_ROLL_UP_MS, MAX_TRANSITION_MS),
            replace: clamp_ms(self.replace_ms, DEFAULT_REPLACE_MS, MAX_TRANSITION_MS),
            replace_content_fade,
            content_reveal_delay,
            content_fade_in: clamp_ms(
                self.content_fade_in_ms,
                DEFAULT_CONTENT_FADE_IN_MS,
                MAX_TRANSITION_MS,
            ),
            reply_snap: clamp_ms(self.reply_snap_ms, DEFAULT_REPLY_SNAP_MS, MAX_TRANSITION_MS),
        }
    }
}

impl GestureConfig {
    /// Converts to validated thresholds.
    #[must_use]
    pub fn resolve(&self) -> GestureThresholds {
        let max_reply_height = clamp_px(self.max_reply_height, DEFAULT_MAX_REPLY_HEIGHT);
        GestureThresholds {
            touch_slop: clamp_px(self.touch_slop, DEFAULT_TOUCH_SLOP),
            dismiss: clamp_px(self.dismiss_threshold, DEFAULT_DISMISS_THRESHOLD),
            expand_snap: clamp_px(self.expand_snap_threshold, DEFAULT_EXPAND_SNAP_THRESHOLD)
                .min(max_reply_height),
            reveal: clamp_px(self.reply_reveal_threshold, DEFAULT_REPLY_REVEAL_THRESHOLD),
            max_reply_height,
        }
    }
}

impl Config {
    /// Builds the runtime settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            timing: self.timing.resolve(),
            gesture: self.gesture.resolve(),
            queue_capacity: QueueCapacity::new(self.queue.max_size.unwrap_or(DEFAULT_QUEUE_SIZE)),
        }
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n warning key explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "invalid banner config, using defaults");
                    return (
                        Config::default(),
                        Some("banner-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`BannerError::Io`] when the file cannot be read and
/// [`BannerError::Config`] when it is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    match get_config_path_with_override(None) {
        Some(path) => save_to_path(config, &path),
        None => Err(BannerError::Config(
            "no config directory available".to_string(),
        )),
    }
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns [`BannerError::Io`] on filesystem failure and
/// [`BannerError::Config`] if serialization fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.timing.min_display_ms = Some(1500);
        config.queue.max_size = Some(3);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("banner.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_uses_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("banner.toml");
        fs::write(&config_path, "[timing]\nmin_display_ms = 2000\n").unwrap();

        let loaded = load_from_path(&config_path).expect("partial config should load");
        let settings = loaded.settings();

        assert_eq!(settings.timing.min_display, Duration::from_millis(2000));
        assert_eq!(
            settings.timing.transition_gap,
            Duration::from_millis(DEFAULT_TRANSITION_GAP_MS)
        );
        assert_eq!(settings.queue_capacity.value(), DEFAULT_QUEUE_SIZE);
    }

    #[test]
    fn invalid_toml_is_an_error_from_path_and_a_warning_from_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("banner.toml");
        fs::write(&config_path, "not = valid = toml").unwrap();

        assert!(matches!(
            load_from_path(&config_path),
            Err(BannerError::Config(_))
        ));

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("banner-config-load-error"));
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.timing.min_display_ms = Some(u64::MAX);
        config.gesture.dismiss_threshold = Some(f32::NAN);
        config.gesture.expand_snap_threshold = Some(500.0);
        config.queue.max_size = Some(0);

        let settings = config.settings();
        assert_eq!(
            settings.timing.min_display,
            Duration::from_millis(MAX_MIN_DISPLAY_MS)
        );
        assert_eq!(settings.gesture.dismiss, DEFAULT_DISMISS_THRESHOLD);
        assert_eq!(
            settings.gesture.expand_snap,
            settings.gesture.max_reply_height
        );
        assert_eq!(settings.queue_capacity.value(), 1);
    }

    #[test]
    fn content_reveal_is_pushed_past_outgoing_fade() {
        let timing = TimingConfig {
            replace_content_fade_ms: Some(200),
            content_reveal_delay_ms: Some(50),
            ..TimingConfig::default()
        }
        .resolve();

        assert!(timing.content_reveal_delay > timing.replace_content_fade);
    }

    #[test]
    fn overlay_transitions_are_configurable() {
        let config: Config =
            toml::from_str("[timing]\ncontent_fade_in_ms = 90\nreply_snap_ms = 5000\n")
                .expect("valid toml");
        let timing = config.settings().timing;

        assert_eq!(timing.content_fade_in, Duration::from_millis(90));
        assert_eq!(timing.reply_snap, Duration::from_millis(MAX_TRANSITION_MS));
        assert_eq!(
            Timing::default().reply_snap,
            Duration::from_millis(DEFAULT_REPLY_SNAP_MS)
        );
    }

    #[test]
    fn default_settings_match_default_config() {
        assert_eq!(Settings::default().timing, Config::default().settings().timing);
        assert_eq!(
            Settings::default().gesture,
            Config::default().settings().gesture
        );
    }
}
