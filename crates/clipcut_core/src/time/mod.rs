//! Time conversions for the editor.
//!
//! Pure functions for converting between seconds, clock strings, frame
//! indices, SMPTE timecodes and normalized percentages. All functions are
//! deterministic and have no side effects.
//!
//! Invalid numeric input (`NaN`, `±inf`) never panics: every formatter
//! returns its zero-valued string instead.

mod format;
mod frames;
mod parse;
mod range;

pub use format::{
    format_duration_human, format_time, format_time_with_milliseconds, format_timecode,
    format_timeline_time,
};
pub use frames::{frame_step, frame_to_time, snap_to_frame, time_to_frame, DEFAULT_FPS};
pub use parse::{parse_time, try_parse_time, TimeField, TimeParseError};
pub use range::{
    clamp_time, percentage_to_time, pixels_to_time, snap_to_grid, time_to_percentage,
    time_to_pixels,
};
