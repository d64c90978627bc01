// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[carousel]` - Transition timing, jump behavior, autoplay, swipe and viewport settings
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. `ICED_CAROUSEL_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config;
//!
//! let (mut config, _warning) = config::load();
//! config.carousel.transition_ms = Some(400);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{AutoplayInterval, SwipeThreshold, TransitionDuration, ViewportSize};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// How a click on an indicator dot moves the carousel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum JumpMode {
    /// One step toward the clicked dot per click.
    #[default]
    Step,
    /// Keep stepping toward the clicked dot until it is reached.
    Direct,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
        }
    }
}

/// Carousel behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Slide transition duration in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,

    /// Indicator dot behavior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_mode: Option<JumpMode>,

    /// Auto-advance interval in seconds; absent or zero disables autoplay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_secs: Option<u32>,

    /// Minimum horizontal travel before a swipe counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold_px: Option<f32>,

    /// Viewport width in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<f32>,

    /// Viewport height in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_height: Option<f32>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            jump_mode: Some(JumpMode::default()),
            autoplay_secs: None,
            swipe_threshold_px: Some(DEFAULT_SWIPE_THRESHOLD_PX),
            viewport_width: Some(DEFAULT_VIEWPORT_WIDTH),
            viewport_height: Some(DEFAULT_VIEWPORT_HEIGHT),
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn transition(&self) -> TransitionDuration {
        self.transition_ms
            .map(TransitionDuration::from_millis)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn autoplay(&self) -> Option<AutoplayInterval> {
        self.autoplay_secs
            .filter(|secs| *secs > 0)
            .map(AutoplayInterval::new)
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.swipe_threshold_px
            .map(SwipeThreshold::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportSize {
        ViewportSize::new(
            self.viewport_width.unwrap_or(DEFAULT_VIEWPORT_WIDTH),
            self.viewport_height.unwrap_or(DEFAULT_VIEWPORT_HEIGHT),
        )
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Carousel behavior settings.
    #[serde(default)]
    pub carousel: CarouselConfig,
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
