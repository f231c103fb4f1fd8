//! Configuration management for the clip editor.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use clipcut_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Frame rate: {}", config.settings().timing.fps);
//!
//! // Modify a setting and save just that section atomically
//! config.settings_mut().display.always_show_hours = true;
//! config.update_section(ConfigSection::Display).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, DisplaySettings, LoggingSettings, Settings, TimingSettings};
