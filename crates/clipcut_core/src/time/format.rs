//! Seconds to display string conversions.
//!
//! Every formatter floors its components and maps non-finite input to a
//! zero-valued string of the same shape.

use super::frames::time_to_frame;

/// Guards the floor of a scaled fraction against representation error
/// (`30.123 % 1.0` is `0.12299999999999898`).
const FRACTION_EPSILON: f64 = 1e-6;

const ZERO_CLOCK: &str = "00:00";
const ZERO_CLOCK_MS: &str = "00:00.000";
const ZERO_DURATION: &str = "0 seconds";
const ZERO_TIMECODE: &str = "00:00:00:00";
const ZERO_TIMELINE: &str = "0:00.00";

/// Zero-pad a component to `width` digits.
fn pad(value: i64, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// Split seconds into floored (hours, minutes, seconds) clock components.
fn clock_parts(seconds: f64) -> (i64, i64, i64) {
    let hours = (seconds / 3600.0).floor() as i64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as i64;
    let secs = (seconds % 60.0).floor() as i64;
    (hours, minutes, secs)
}

/// Floor the fractional part of `seconds` scaled by `scale` (1000 for
/// milliseconds, 100 for centiseconds), capped below `scale`.
fn fraction_part(seconds: f64, scale: f64) -> i64 {
    let scaled = ((seconds % 1.0) * scale + FRACTION_EPSILON).floor();
    scaled.min(scale - 1.0) as i64
}

/// Format seconds as `MM:SS`, or `HH:MM:SS` when hours are present.
///
/// # Arguments
/// * `seconds` - Time in seconds
/// * `include_hours` - Always emit the hours field
///
/// # Examples
/// ```
/// use clipcut_core::format_time;
///
/// assert_eq!(format_time(90.0, false), "01:30");
/// assert_eq!(format_time(3665.0, false), "01:01:05");
/// assert_eq!(format_time(30.0, true), "00:00:30");
/// assert_eq!(format_time(f64::NAN, false), "00:00");
/// ```
pub fn format_time(seconds: f64, include_hours: bool) -> String {
    if !seconds.is_finite() {
        return ZERO_CLOCK.to_string();
    }

    let (hours, minutes, secs) = clock_parts(seconds);

    if hours > 0 || include_hours {
        format!("{}:{}:{}", pad(hours, 2), pad(minutes, 2), pad(secs, 2))
    } else {
        format!("{}:{}", pad(minutes, 2), pad(secs, 2))
    }
}

/// Format seconds as `MM:SS.mmm`, or `HH:MM:SS.mmm` when hours are present.
///
/// # Examples
/// ```
/// use clipcut_core::format_time_with_milliseconds;
///
/// assert_eq!(format_time_with_milliseconds(90.456), "01:30.456");
/// assert_eq!(format_time_with_milliseconds(3600.789), "01:00:00.789");
/// ```
pub fn format_time_with_milliseconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return ZERO_CLOCK_MS.to_string();
    }

    let (hours, minutes, secs) = clock_parts(seconds);
    let ms = fraction_part(seconds, 1000.0);

    if hours > 0 {
        format!(
            "{}:{}:{}.{}",
            pad(hours, 2),
            pad(minutes, 2),
            pad(secs, 2),
            pad(ms, 3)
        )
    } else {
        format!("{}:{}.{}", pad(minutes, 2), pad(secs, 2), pad(ms, 3))
    }
}

fn plural(count: i64, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

/// Format a duration as a phrase such as `1 hour, 1 minute, 5 seconds`.
///
/// Zero components are skipped, but an all-zero duration still reads
/// `0 seconds`.
///
/// # Examples
/// ```
/// use clipcut_core::format_duration_human;
///
/// assert_eq!(format_duration_human(90.0), "1 minute, 30 seconds");
/// assert_eq!(format_duration_human(7200.0), "2 hours");
/// assert_eq!(format_duration_human(0.0), "0 seconds");
/// ```
pub fn format_duration_human(seconds: f64) -> String {
    if !seconds.is_finite() {
        return ZERO_DURATION.to_string();
    }

    let (hours, minutes, secs) = clock_parts(seconds);
    let mut parts = Vec::with_capacity(3);

    if hours > 0 {
        parts.push(plural(hours, "hour", "hours"));
    }

    if minutes > 0 {
        parts.push(plural(minutes, "minute", "minutes"));
    }

    if secs > 0 || parts.is_empty() {
        parts.push(plural(secs, "second", "seconds"));
    }

    parts.join(", ")
}

/// Format seconds as an SMPTE-style `HH:MM:SS:FF` timecode.
///
/// The total frame count is floored (same as [`time_to_frame`]), then split
/// into whole seconds and a frame remainder. Fractional frame rates are
/// non-drop: the frame field is floored.
///
/// # Arguments
/// * `seconds` - Time in seconds
/// * `fps` - Frame rate (e.g., 30.0)
///
/// # Examples
/// ```
/// use clipcut_core::format_timecode;
///
/// assert_eq!(format_timecode(1.5, 30.0), "00:00:01:15");
/// assert_eq!(format_timecode(3661.0, 30.0), "01:01:01:00");
/// ```
pub fn format_timecode(seconds: f64, fps: f64) -> String {
    if !seconds.is_finite() || !fps.is_finite() || fps <= 0.0 {
        return ZERO_TIMECODE.to_string();
    }

    let total_frames = time_to_frame(seconds, fps) as f64;
    let frames = (total_frames % fps).floor() as i64;
    let total_seconds = (total_frames / fps).floor();
    let secs = (total_seconds % 60.0) as i64;
    let total_minutes = (total_seconds / 60.0).floor();
    let minutes = (total_minutes % 60.0) as i64;
    let hours = (total_minutes / 60.0).floor() as i64;

    format!(
        "{}:{}:{}:{}",
        pad(hours, 2),
        pad(minutes, 2),
        pad(secs, 2),
        pad(frames, 2)
    )
}

/// Format seconds for timeline ruler labels: `M:SS.cc` or `H:MM:SS.cc`.
///
/// The leading field is not padded.
pub fn format_timeline_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return ZERO_TIMELINE.to_string();
    }

    let (hours, minutes, secs) = clock_parts(seconds);
    let centis = fraction_part(seconds, 100.0);

    if hours > 0 {
        format!(
            "{}:{}:{}.{}",
            hours,
            pad(minutes, 2),
            pad(secs, 2),
            pad(centis, 2)
        )
    } else {
        format!("{}:{}.{}", minutes, pad(secs, 2), pad(centis, 2))
    }
}
