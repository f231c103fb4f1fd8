//! Clamping, percentage mapping and timeline pixel helpers.

/// Clamp a time between `min` and `max`.
///
/// The bounds are not validated and this never panics, unlike
/// [`f64::clamp`]. When `min > max`, `min` wins. A `NaN` time stays `NaN`.
pub fn clamp_time(time: f64, min: f64, max: f64) -> f64 {
    if time.is_nan() {
        return time;
    }
    time.min(max).max(min)
}

/// Position of `time` within `[start, end]` as a fraction in `[0, 1]`.
///
/// Returns 0 for an empty or inverted range.
///
/// # Examples
/// ```
/// use clipcut_core::time_to_percentage;
///
/// assert_eq!(time_to_percentage(5.0, 0.0, 10.0), 0.5);
/// assert_eq!(time_to_percentage(15.0, 0.0, 10.0), 1.0);
/// assert_eq!(time_to_percentage(5.0, 10.0, 10.0), 0.0);
/// ```
pub fn time_to_percentage(time: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return 0.0;
    }
    clamp_time((time - start) / (end - start), 0.0, 1.0)
}

/// Time at `percentage` of the way through `[start, end]`.
///
/// The percentage is clamped to `[0, 1]` first.
pub fn percentage_to_time(percentage: f64, start: f64, end: f64) -> f64 {
    start + (end - start) * clamp_time(percentage, 0.0, 1.0)
}

/// Round a time to the nearest multiple of `grid_size`.
///
/// A non-positive or non-finite grid leaves the time unchanged.
pub fn snap_to_grid(time: f64, grid_size: f64) -> f64 {
    if !grid_size.is_finite() || grid_size <= 0.0 {
        return time;
    }
    (time / grid_size).round() * grid_size
}

/// Horizontal timeline offset for a time at the given zoom level.
#[inline]
pub fn time_to_pixels(time: f64, pixels_per_second: f64) -> f64 {
    time * pixels_per_second
}

/// Time under a horizontal timeline offset at the given zoom level.
///
/// Returns 0 when the zoom level is not positive.
pub fn pixels_to_time(pixels: f64, pixels_per_second: f64) -> f64 {
    if pixels_per_second <= 0.0 || pixels_per_second.is_nan() {
        return 0.0;
    }
    pixels / pixels_per_second
}
