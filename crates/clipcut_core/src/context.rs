//! Time conversions bound to the user's settings.
//!
//! The free functions in [`crate::time`] take the frame rate on every call;
//! UI code holds a [`TimingContext`] instead so the configured rate and
//! display preferences apply everywhere.

use crate::config::Settings;
use crate::time::{self, DEFAULT_FPS};
use crate::trim::{check_trim_range, TrimValidation, MIN_TRIM_DURATION};

/// Frame rate, trim limit and clock style for one editing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingContext {
    pub fps: f64,
    /// Shortest allowed trim, in seconds.
    pub min_trim_duration: f64,
    pub always_show_hours: bool,
    pub show_milliseconds: bool,
}

impl Default for TimingContext {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            min_trim_duration: MIN_TRIM_DURATION,
            always_show_hours: false,
            show_milliseconds: false,
        }
    }
}

impl TimingContext {
    /// Context with the default settings at another frame rate.
    pub fn with_fps(fps: f64) -> Self {
        Self {
            fps,
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            fps: settings.timing.fps,
            min_trim_duration: settings.timing.min_trim_duration,
            always_show_hours: settings.display.always_show_hours,
            show_milliseconds: settings.display.show_milliseconds,
        }
    }

    /// Playhead clock in the configured style.
    pub fn format_time(&self, seconds: f64) -> String {
        if self.show_milliseconds {
            time::format_time_with_milliseconds(seconds)
        } else {
            time::format_time(seconds, self.always_show_hours)
        }
    }

    pub fn format_timecode(&self, seconds: f64) -> String {
        time::format_timecode(seconds, self.fps)
    }

    pub fn time_to_frame(&self, seconds: f64) -> i64 {
        time::time_to_frame(seconds, self.fps)
    }

    pub fn frame_to_time(&self, frame: i64) -> f64 {
        time::frame_to_time(frame, self.fps)
    }

    pub fn frame_step(&self) -> f64 {
        time::frame_step(self.fps)
    }

    pub fn snap_to_frame(&self, seconds: f64) -> f64 {
        time::snap_to_frame(seconds, self.fps)
    }

    /// Move `seconds` by `frames` whole frames (negative steps back), landing
    /// on a frame boundary.
    ///
    /// # Examples
    /// ```
    /// use clipcut_core::TimingContext;
    ///
    /// let ctx = TimingContext::with_fps(25.0);
    /// assert!((ctx.step_frames(1.0, 5) - 1.2).abs() < 1e-9);
    /// assert!((ctx.step_frames(1.0, -25) - 0.0).abs() < 1e-9);
    /// ```
    pub fn step_frames(&self, seconds: f64, frames: i64) -> f64 {
        self.snap_to_frame(seconds + frames as f64 * self.frame_step())
    }

    /// Trim validation with the configured minimum length.
    pub fn validate_trim(&self, trim_start: f64, trim_end: f64, duration: f64) -> TrimValidation {
        check_trim_range(trim_start, trim_end, duration, self.min_trim_duration).into()
    }
}
