//! Clock string to seconds parsing.
//!
//! Accepted forms: `MM:SS`, `HH:MM:SS`, either with a fractional seconds
//! field (`MM:SS.mmm`, `HH:MM:SS.mmm`).

use std::fmt;

use tracing::debug;

/// A field of a clock string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeField::Hours => "hours",
            TimeField::Minutes => "minutes",
            TimeField::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when parsing a clock string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeParseError {
    /// Empty or whitespace-only input.
    #[error("Empty time string")]
    Empty,

    /// Not two or three colon-separated fields.
    #[error("Expected MM:SS or HH:MM:SS, found {0} field(s)")]
    FieldCount(usize),

    /// A field is not a number.
    #[error("Invalid {field} value: '{value}'")]
    InvalidComponent { field: TimeField, value: String },

    /// A field parsed but is not a valid clock value.
    #[error("{field} value out of range: '{value}'")]
    OutOfRange { field: TimeField, value: String },
}

impl TimeParseError {
    fn invalid(field: TimeField, value: &str) -> Self {
        Self::InvalidComponent {
            field,
            value: value.to_string(),
        }
    }

    fn out_of_range(field: TimeField, value: &str) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
        }
    }

    /// Whether the string was well-formed but held an impossible clock value.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

fn parse_whole(value: &str, field: TimeField) -> Result<i64, TimeParseError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| TimeParseError::invalid(field, value))
}

fn parse_seconds(value: &str) -> Result<f64, TimeParseError> {
    match value.trim().parse::<f64>() {
        Ok(secs) if secs.is_finite() => Ok(secs),
        _ => Err(TimeParseError::invalid(TimeField::Seconds, value)),
    }
}

/// Parse a clock string into seconds.
///
/// Hours and minutes must be whole numbers; the seconds field may carry a
/// fraction. Every field is parsed before any range check, so a string with
/// both a non-numeric field and an out-of-range field reports the former.
///
/// Range rules:
/// - seconds in `[0, 60)`
/// - minutes in `[0, 60)` when an hours field is present, otherwise `>= 0`
/// - hours `>= 0`
///
/// # Examples
/// ```
/// use clipcut_core::{try_parse_time, TimeParseError};
///
/// assert_eq!(try_parse_time("01:01:05"), Ok(3665.0));
/// assert_eq!(try_parse_time(""), Err(TimeParseError::Empty));
/// assert!(try_parse_time("99:99:99").unwrap_err().is_out_of_range());
/// ```
pub fn try_parse_time(time_string: &str) -> Result<f64, TimeParseError> {
    if time_string.trim().is_empty() {
        return Err(TimeParseError::Empty);
    }

    let parts: Vec<&str> = time_string.split(':').collect();
    let (hours_str, minutes_str, seconds_str) = match parts.as_slice() {
        [minutes, seconds] => (None, *minutes, *seconds),
        [hours, minutes, seconds] => (Some(*hours), *minutes, *seconds),
        _ => return Err(TimeParseError::FieldCount(parts.len())),
    };

    let hours = match hours_str {
        Some(h) => Some(parse_whole(h, TimeField::Hours)?),
        None => None,
    };
    let minutes = parse_whole(minutes_str, TimeField::Minutes)?;
    let seconds = parse_seconds(seconds_str)?;

    if let (Some(h), Some(raw)) = (hours, hours_str) {
        if h < 0 {
            return Err(TimeParseError::out_of_range(TimeField::Hours, raw));
        }
    }
    if minutes < 0 || (hours.is_some() && minutes >= 60) {
        return Err(TimeParseError::out_of_range(
            TimeField::Minutes,
            minutes_str,
        ));
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(TimeParseError::out_of_range(
            TimeField::Seconds,
            seconds_str,
        ));
    }

    let hours = hours.unwrap_or(0) as f64;
    Ok(hours * 3600.0 + minutes as f64 * 60.0 + seconds)
}

/// Parse a clock string into seconds, with the editor's legacy fallbacks.
///
/// Malformed input (empty, wrong field count, non-numeric field) yields
/// `0.0`. A well-formed string holding an out-of-range clock value such as
/// `"99:99:99"` yields `NaN`. New callers should prefer [`try_parse_time`].
///
/// # Examples
/// ```
/// use clipcut_core::parse_time;
///
/// assert_eq!(parse_time("01:30"), 90.0);
/// assert_eq!(parse_time("00:30.500"), 30.5);
/// assert_eq!(parse_time("invalid"), 0.0);
/// assert!(parse_time("99:99:99").is_nan());
/// ```
pub fn parse_time(time_string: &str) -> f64 {
    match try_parse_time(time_string) {
        Ok(seconds) => seconds,
        Err(err) if err.is_out_of_range() => {
            debug!("parse_time('{}'): {}", time_string, err);
            f64::NAN
        }
        Err(err) => {
            debug!("parse_time('{}'): {}, using 0", time_string, err);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes_seconds() {
        assert_eq!(parse_time("00:00"), 0.0);
        assert_eq!(parse_time("00:30"), 30.0);
        assert_eq!(parse_time("01:30"), 90.0);
        assert_eq!(parse_time("02:05"), 125.0);
    }

    #[test]
    fn parses_hours_minutes_seconds() {
        assert_eq!(parse_time("01:00:00"), 3600.0);
        assert_eq!(parse_time("01:01:05"), 3665.0);
        assert_eq!(parse_time("02:02:05"), 7325.0);
    }

    #[test]
    fn parses_fractional_seconds() {
        assert_eq!(parse_time("00:30.500"), 30.5);
        assert_eq!(parse_time("01:00:00.250"), 3600.25);
    }

    #[test]
    fn minutes_unbounded_without_hours() {
        assert_eq!(parse_time("90:00"), 5400.0);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_time(" 01:30 "), 90.0);
    }

    #[test]
    fn malformed_input_is_zero() {
        assert_eq!(parse_time(""), 0.0);
        assert_eq!(parse_time("   "), 0.0);
        assert_eq!(parse_time("invalid"), 0.0);
        assert_eq!(parse_time("ab:cd"), 0.0);
        assert_eq!(parse_time("1:2:3:4"), 0.0);
        assert_eq!(parse_time("1.5:30"), 0.0);
        assert_eq!(parse_time("00:inf"), 0.0);
    }

    #[test]
    fn out_of_range_is_nan() {
        assert!(parse_time("99:99:99").is_nan());
        assert!(parse_time("00:60").is_nan());
        assert!(parse_time("01:60:00").is_nan());
        assert!(parse_time("-01:30").is_nan());
    }

    #[test]
    fn format_error_wins_over_range_error() {
        assert_eq!(
            try_parse_time("99:xx:99"),
            Err(TimeParseError::InvalidComponent {
                field: TimeField::Minutes,
                value: "xx".to_string(),
            })
        );
    }

    #[test]
    fn typed_errors() {
        assert_eq!(try_parse_time(""), Err(TimeParseError::Empty));
        assert_eq!(try_parse_time("invalid"), Err(TimeParseError::FieldCount(1)));
        assert_eq!(
            try_parse_time("99:99:99"),
            Err(TimeParseError::OutOfRange {
                field: TimeField::Minutes,
                value: "99".to_string(),
            })
        );
    }

    #[test]
    fn error_messages() {
        let err = try_parse_time("00:abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid seconds value: 'abc'");
    }
}
