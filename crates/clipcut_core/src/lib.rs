//! Clipcut Core - time handling for the clip editor
//!
//! This crate contains the time, frame and timecode math used by the editor's
//! timeline, scrubber and trim controls, with zero UI dependencies.
//!
//! - [`time`]: formatting, parsing, frame conversion and range helpers
//! - [`trim`]: trim range validation and the [`TrimRange`] value type
//! - [`context`]: [`TimingContext`], the conversions bound to user settings
//! - [`config`]: TOML settings file management
//! - [`logging`]: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use clipcut_core::{format_time, format_timecode, parse_time, validate_trim_range};
//!
//! assert_eq!(format_time(125.0, false), "02:05");
//! assert_eq!(format_timecode(1.5, 30.0), "00:00:01:15");
//! assert_eq!(parse_time("01:30"), 90.0);
//! assert!(validate_trim_range(0.0, 10.0, 20.0).valid);
//! ```

pub mod config;
pub mod context;
pub mod logging;
pub mod time;
pub mod trim;

pub use context::TimingContext;
pub use time::{
    clamp_time, format_duration_human, format_time, format_time_with_milliseconds,
    format_timecode, format_timeline_time, frame_step, frame_to_time, parse_time,
    percentage_to_time, pixels_to_time, snap_to_frame, snap_to_grid, time_to_frame,
    time_to_percentage, time_to_pixels, try_parse_time, TimeParseError, DEFAULT_FPS,
};
pub use trim::{
    check_trim_range, validate_trim_range, TrimError, TrimRange, TrimValidation,
    MIN_TRIM_DURATION,
};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
