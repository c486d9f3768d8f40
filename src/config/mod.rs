// SPDX-License-Identifier: MPL-2.0
//! This module handles the page configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[layout]` - Desktop breakpoint and swipe threshold
//! - `[timing]` - Announcement and success-flash lifetimes
//! - `[storage]` - Cart storage key
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PRODUCT_PAGE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use product_page::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{Breakpoint, FeedbackDelay, SwipeThreshold};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

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

/// Responsive layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Width at which the desktop layout starts.
    #[serde(
        default = "default_desktop_breakpoint_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub desktop_breakpoint_px: Option<u32>,

    /// Horizontal travel a touch must exceed to count as a swipe.
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<u32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint_px: default_desktop_breakpoint_px(),
            swipe_threshold_px: default_swipe_threshold_px(),
        }
    }
}

/// Transient feedback lifetimes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// How long an announcement stays in the live region.
    #[serde(
        default = "default_feedback_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub announcement_clear_ms: Option<u64>,

    /// How long the add-to-cart control shows its success state.
    #[serde(
        default = "default_feedback_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub success_flash_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            announcement_clear_ms: default_feedback_delay_ms(),
            success_flash_ms: default_feedback_delay_ms(),
        }
    }
}

/// Cart storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Key the serialized cart lives under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_key: default_cart_key(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Page configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Desktop breakpoint, clamped.
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.layout
            .desktop_breakpoint_px
            .map(Breakpoint::new)
            .unwrap_or_default()
    }

    /// Swipe threshold, clamped.
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.layout
            .swipe_threshold_px
            .map(SwipeThreshold::new)
            .unwrap_or_default()
    }

    /// Announcement lifetime, clamped.
    #[must_use]
    pub fn announcement_delay(&self) -> FeedbackDelay {
        self.timing
            .announcement_clear_ms
            .map(FeedbackDelay::from_millis)
            .unwrap_or_default()
    }

    /// Success-flash lifetime, clamped.
    #[must_use]
    pub fn success_flash_delay(&self) -> FeedbackDelay {
        self.timing
            .success_flash_ms
            .map(FeedbackDelay::from_millis)
            .unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_desktop_breakpoint_px() -> Option<u32> {
    Some(DEFAULT_DESKTOP_BREAKPOINT_PX)
}

fn default_swipe_threshold_px() -> Option<u32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_feedback_delay_ms() -> Option<u64> {
    Some(DEFAULT_FEEDBACK_DELAY_MS)
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
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
/// default config with a warning key explaining what went wrong.
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
                    log::warn!("ignoring unreadable config {}: {}", path.display(), err);
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
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the config
/// cannot be serialized, or the file cannot be written.
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
