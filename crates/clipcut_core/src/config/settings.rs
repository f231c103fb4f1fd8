//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::logging::LogLevel;
use crate::time::DEFAULT_FPS;
use crate::trim::MIN_TRIM_DURATION;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Frame rate and trim limits.
    #[serde(default)]
    pub timing: TimingSettings,

    /// Clock display preferences.
    #[serde(default)]
    pub display: DisplaySettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Replace values the editor cannot work with by their defaults.
    ///
    /// Returns true if anything was changed.
    pub fn repair(&mut self) -> bool {
        self.timing.repair()
    }
}

/// Frame rate and trim limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSettings {
    /// Frame rate used for frame stepping, snapping and timecodes.
    #[serde(default = "default_fps")]
    pub fps: f64,

    /// Shortest allowed trim, in seconds.
    #[serde(default = "default_min_trim_duration")]
    pub min_trim_duration: f64,
}

fn default_fps() -> f64 {
    DEFAULT_FPS
}

fn default_min_trim_duration() -> f64 {
    MIN_TRIM_DURATION
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            min_trim_duration: default_min_trim_duration(),
        }
    }
}

impl TimingSettings {
    fn repair(&mut self) -> bool {
        let mut changed = false;

        if !self.fps.is_finite() || self.fps <= 0.0 {
            warn!("Invalid timing.fps {}, using {}", self.fps, DEFAULT_FPS);
            self.fps = default_fps();
            changed = true;
        }

        if !self.min_trim_duration.is_finite() || self.min_trim_duration <= 0.0 {
            warn!(
                "Invalid timing.min_trim_duration {}, using {}",
                self.min_trim_duration, MIN_TRIM_DURATION
            );
            self.min_trim_duration = default_min_trim_duration();
            changed = true;
        }

        changed
    }
}

/// Clock display preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Show the hours field even for clips under an hour.
    #[serde(default)]
    pub always_show_hours: bool,

    /// Show milliseconds in the playhead clock.
    #[serde(default)]
    pub show_milliseconds: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,
}

/// Config sections for atomic updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Timing,
    Display,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 3] = [
        ConfigSection::Timing,
        ConfigSection::Display,
        ConfigSection::Logging,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Timing => "timing",
            ConfigSection::Display => "display",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section header.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigSection::Timing => "Frame rate and trim limits",
            ConfigSection::Display => "Clock display preferences",
            ConfigSection::Logging => "Logging configuration",
        }
    }
}
