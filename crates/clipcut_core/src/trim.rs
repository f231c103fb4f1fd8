//! Trim range validation and the editor's trim state.
//!
//! A trim range is the `(start, end)` sub-interval of a clip, in seconds,
//! selected for export. Validation checks run in a fixed order and the
//! first failure is reported:
//!
//! 1. start is negative
//! 2. end exceeds the clip duration
//! 3. start is not before end
//! 4. the range is shorter than the minimum (100ms by default)

use serde::{Deserialize, Serialize};

/// Shortest trim the editor will export, in seconds.
pub const MIN_TRIM_DURATION: f64 = 0.1;

/// Errors that can occur when validating a trim range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrimError {
    #[error("Start time cannot be negative")]
    NegativeStart { start: f64 },

    #[error("End time cannot exceed video duration")]
    ExceedsDuration { end: f64, duration: f64 },

    #[error("Start time must be before end time")]
    StartNotBeforeEnd { start: f64, end: f64 },

    #[error("Trim duration must be at least {min_ms}ms")]
    TooShort { length: f64, min_ms: u64 },
}

/// Check a trim range against a clip duration.
///
/// # Arguments
/// * `trim_start` - Trim start in seconds
/// * `trim_end` - Trim end in seconds
/// * `duration` - Total clip duration in seconds
/// * `min_duration` - Shortest allowed trim in seconds
pub fn check_trim_range(
    trim_start: f64,
    trim_end: f64,
    duration: f64,
    min_duration: f64,
) -> Result<(), TrimError> {
    if trim_start < 0.0 {
        return Err(TrimError::NegativeStart { start: trim_start });
    }

    if trim_end > duration {
        return Err(TrimError::ExceedsDuration {
            end: trim_end,
            duration,
        });
    }

    if trim_start >= trim_end {
        return Err(TrimError::StartNotBeforeEnd {
            start: trim_start,
            end: trim_end,
        });
    }

    let length = trim_end - trim_start;
    if length < min_duration {
        return Err(TrimError::TooShort {
            length,
            min_ms: (min_duration * 1000.0).round() as u64,
        });
    }

    Ok(())
}

/// Outcome of [`validate_trim_range`], shaped for UI feedback.
///
/// Serializes as `{"valid":true}` or `{"valid":false,"message":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimValidation {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TrimValidation {
    /// A passing validation with no message.
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing validation carrying a user-facing message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Render as JSON for the UI layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Result<(), TrimError>> for TrimValidation {
    fn from(result: Result<(), TrimError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(err) => Self::invalid(err.to_string()),
        }
    }
}

/// Validate a trim range with the default 100ms minimum.
///
/// # Examples
/// ```
/// use clipcut_core::validate_trim_range;
///
/// assert!(validate_trim_range(0.0, 10.0, 20.0).valid);
///
/// let result = validate_trim_range(-5.0, 10.0, 20.0);
/// assert!(!result.valid);
/// assert!(result.message.unwrap().contains("negative"));
/// ```
pub fn validate_trim_range(trim_start: f64, trim_end: f64, duration: f64) -> TrimValidation {
    check_trim_range(trim_start, trim_end, duration, MIN_TRIM_DURATION).into()
}

/// Trim points of the clip being edited.
///
/// Moving one end past the other drags the other end along, so `start`
/// never exceeds `end` through the setters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrimRange {
    pub start: f64,
    pub end: f64,
    /// Total clip duration in seconds.
    pub duration: f64,
}

impl TrimRange {
    /// Trim covering the whole clip.
    pub fn new(duration: f64) -> Self {
        Self {
            start: 0.0,
            end: duration,
            duration,
        }
    }

    /// Move the start point; pushes `end` forward if needed.
    pub fn set_start(&mut self, time: f64) {
        self.start = time;
        self.end = time.max(self.end);
    }

    /// Move the end point; pulls `start` back if needed.
    pub fn set_end(&mut self, time: f64) {
        self.end = time;
        self.start = time.min(self.start);
    }

    /// Change the clip duration. The end point follows the new duration.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
        self.end = duration;
    }

    /// Length of the trimmed section in seconds.
    pub fn trim_duration(&self) -> f64 {
        self.end - self.start
    }

    /// Playback progress through the trimmed section.
    ///
    /// Not clamped: positions outside the trim give values outside `[0, 1]`.
    /// An empty clip reports 0.
    pub fn progress(&self, current_time: f64) -> f64 {
        if self.duration == 0.0 {
            return 0.0;
        }
        (current_time - self.start) / (self.end - self.start)
    }

    pub fn is_valid(&self) -> bool {
        self.start < self.end && self.end > 0.0
    }

    /// Restore the full-clip trim.
    pub fn reset(&mut self) {
        self.start = 0.0;
        self.end = self.duration;
    }

    /// Run the full trim checks against this range's own duration.
    pub fn validate(&self, min_duration: f64) -> Result<(), TrimError> {
        check_trim_range(self.start, self.end, self.duration, min_duration)
    }
}
