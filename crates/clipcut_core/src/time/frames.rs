//! Frame/time conversion functions.
//!
//! # Floor vs. round
//!
//! - [`time_to_frame`] floors: it answers "which frame is on screen at this
//!   time", so playback positions always bias toward the earlier frame.
//! - [`snap_to_frame`] rounds: it pulls a continuous drag position onto the
//!   nearest frame boundary and returns a time, not an index.

/// Frame rate used when the caller does not supply one.
pub const DEFAULT_FPS: f64 = 30.0;

/// Tolerance, in frames, for floor conversions.
///
/// `(frame / fps) * fps` can land an ulp or two under `frame`, so the
/// tolerance grows with the frame count.
const FRAME_EPSILON: f64 = 1e-9;
const FRAME_RELATIVE_EPSILON: f64 = 1e-12;

/// Convert a frame index to its start time in seconds (exact, no rounding).
///
/// # Examples
/// ```
/// use clipcut_core::frame_to_time;
///
/// assert_eq!(frame_to_time(30, 30.0), 1.0);
/// assert_eq!(frame_to_time(24, 24.0), 1.0);
/// assert!((frame_to_time(15, 30.0) - 0.5).abs() < 1e-9);
/// ```
pub fn frame_to_time(frame: i64, fps: f64) -> f64 {
    frame as f64 / fps
}

/// Convert a time in seconds to the frame displaying at that time (floor).
///
/// Non-finite products (`NaN` time, zero fps) map to frame 0; values past
/// the `i64` range saturate.
///
/// # Examples
/// ```
/// use clipcut_core::time_to_frame;
///
/// assert_eq!(time_to_frame(1.0, 30.0), 30);
/// assert_eq!(time_to_frame(1.99, 30.0), 59); // still frame 59
/// assert_eq!(time_to_frame(0.016, 30.0), 0);
/// ```
pub fn time_to_frame(time: f64, fps: f64) -> i64 {
    let frames = time * fps;
    if !frames.is_finite() {
        return 0;
    }
    let tolerance = FRAME_EPSILON.max(frames.abs() * FRAME_RELATIVE_EPSILON);
    (frames + tolerance).floor() as i64
}

/// Duration of a single frame in seconds.
#[inline]
pub fn frame_step(fps: f64) -> f64 {
    1.0 / fps
}

/// Round a time to the nearest frame boundary.
///
/// # Examples
/// ```
/// use clipcut_core::snap_to_frame;
///
/// // 0.02s is closer to frame 1 (0.0333s) than frame 0
/// assert!((snap_to_frame(0.02, 30.0) - 1.0 / 30.0).abs() < 1e-9);
/// // 0.016s is 0.48 frames in, so it snaps back to 0
/// assert_eq!(snap_to_frame(0.016, 30.0), 0.0);
/// ```
pub fn snap_to_frame(time: f64, fps: f64) -> f64 {
    (time * fps).round() / fps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_time() {
        assert_eq!(frame_to_time(0, DEFAULT_FPS), 0.0);
        assert_eq!(frame_to_time(30, DEFAULT_FPS), 1.0);
        assert_eq!(frame_to_time(60, DEFAULT_FPS), 2.0);
        assert!((frame_to_time(15, DEFAULT_FPS) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_frame_to_time_other_rates() {
        assert_eq!(frame_to_time(24, 24.0), 1.0);
        assert_eq!(frame_to_time(60, 60.0), 1.0);
        assert_eq!(frame_to_time(25, 25.0), 1.0);
    }

    #[test]
    fn test_time_to_frame() {
        assert_eq!(time_to_frame(0.0, DEFAULT_FPS), 0);
        assert_eq!(time_to_frame(1.0, DEFAULT_FPS), 30);
        assert_eq!(time_to_frame(2.0, DEFAULT_FPS), 60);
        assert_eq!(time_to_frame(0.5, DEFAULT_FPS), 15);
        assert_eq!(time_to_frame(1.0, 24.0), 24);
        assert_eq!(time_to_frame(1.0, 60.0), 60);
        assert_eq!(time_to_frame(1.0, 25.0), 25);
    }

    #[test]
    fn test_time_to_frame_floors() {
        assert_eq!(time_to_frame(1.99, 30.0), 59);
        assert_eq!(time_to_frame(0.99, 30.0), 29);
    }

    #[test]
    fn test_time_to_frame_non_finite() {
        assert_eq!(time_to_frame(f64::NAN, 30.0), 0);
        assert_eq!(time_to_frame(f64::INFINITY, 30.0), 0);
        assert_eq!(time_to_frame(1.0, f64::INFINITY), 0);
    }

    #[test]
    fn test_frame_step() {
        assert!((frame_step(30.0) - 0.0333).abs() < 1e-4);
        assert!((frame_step(24.0) - 0.0416).abs() < 1e-4);
        assert!((frame_step(60.0) - 0.0166).abs() < 1e-4);
    }

    #[test]
    fn test_snap_to_frame() {
        assert_eq!(snap_to_frame(0.016, 30.0), 0.0);
        assert!((snap_to_frame(0.017, 30.0) - 0.0333).abs() < 1e-3);
        assert!((snap_to_frame(0.5, 30.0) - 0.5).abs() < 1e-3);
        assert!((snap_to_frame(1.017, 30.0) - 1.0333).abs() < 1e-3);
        assert!((snap_to_frame(0.041, 24.0) - 0.0416).abs() < 1e-3);
        assert!((snap_to_frame(0.016, 60.0) - 0.0166).abs() < 1e-3);
    }

    #[test]
    fn test_snap_differs_from_floor() {
        assert_eq!(time_to_frame(0.02, 30.0), 0);
        assert!((snap_to_frame(0.02, 30.0) - frame_step(30.0)).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_floor() {
        for fps in [23.976, 24.0, 25.0, 29.97, 30.0, 49.0, 59.94, 60.0] {
            for frame in 0..2000 {
                let time = frame_to_time(frame, fps);
                let recovered = time_to_frame(time, fps);
                assert_eq!(frame, recovered, "Roundtrip failed for frame {} at {}fps", frame, fps);
            }
        }
    }
}
