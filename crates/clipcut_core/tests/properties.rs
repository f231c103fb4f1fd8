//! Property-based tests for the time conversions.
//!
//! Uses proptest to check frame round-trips, percentage mapping and the
//! no-panic guarantees of the formatters.

use clipcut_core::{
    clamp_time, format_duration_human, format_time, format_time_with_milliseconds,
    format_timecode, frame_to_time, parse_time, percentage_to_time, snap_to_frame,
    time_to_frame, time_to_percentage, validate_trim_range,
};
use proptest::prelude::*;

// =============================================================================
// Frame Conversion
// =============================================================================

proptest! {
    /// A frame index survives conversion to time and back.
    #[test]
    fn frame_roundtrip(frame in 0i64..5_000_000, fps in 1.0f64..240.0) {
        let time = frame_to_time(frame, fps);
        prop_assert_eq!(time_to_frame(time, fps), frame);
    }

    /// Common broadcast rates, including NTSC fractional ones.
    #[test]
    fn frame_roundtrip_standard_rates(
        frame in 0i64..10_000_000,
        fps in prop::sample::select(vec![23.976, 24.0, 25.0, 29.97, 30.0, 50.0, 59.94, 60.0]),
    ) {
        prop_assert_eq!(time_to_frame(frame_to_time(frame, fps), fps), frame);
    }

    /// Snapping lands within half a frame of the input.
    #[test]
    fn snap_stays_within_half_frame(time in 0.0f64..36_000.0, fps in 1.0f64..120.0) {
        let snapped = snap_to_frame(time, fps);
        prop_assert!((snapped - time).abs() <= 0.5 / fps + 1e-9);
    }

    /// The floored frame never starts after the time it was taken from.
    #[test]
    fn floor_frame_starts_at_or_before_time(time in 0.0f64..36_000.0, fps in 1.0f64..120.0) {
        let frame = time_to_frame(time, fps);
        prop_assert!(frame_to_time(frame, fps) <= time + 1e-6);
        prop_assert!(frame_to_time(frame + 1, fps) > time - 1e-9);
    }
}

// =============================================================================
// Percentage Mapping
// =============================================================================

proptest! {
    /// Mapping to a percentage and back equals clamping into the range.
    #[test]
    fn percentage_roundtrip_is_clamp(
        time in -1_000.0f64..1_000.0,
        start in -500.0f64..500.0,
        len in 0.001f64..500.0,
    ) {
        let end = start + len;
        let pct = time_to_percentage(time, start, end);
        let back = percentage_to_time(pct, start, end);
        let expected = clamp_time(time, start, end);
        prop_assert!((back - expected).abs() < 1e-6, "{} vs {}", back, expected);
    }

    /// Percentages are always in [0, 1].
    #[test]
    fn percentage_in_unit_range(time in any::<f64>(), start in -1e6f64..1e6, end in -1e6f64..1e6) {
        let pct = time_to_percentage(time, start, end);
        if !time.is_nan() {
            prop_assert!((0.0..=1.0).contains(&pct));
        }
    }
}

// =============================================================================
// Formatting And Parsing
// =============================================================================

proptest! {
    /// Formatters never panic, whatever the input.
    #[test]
    fn formatters_total(seconds in any::<f64>(), fps in any::<f64>()) {
        let _ = format_time(seconds, false);
        let _ = format_time_with_milliseconds(seconds);
        let _ = format_duration_human(seconds);
        let _ = format_timecode(seconds, fps);
    }

    /// Whole-second clock strings parse back to the same value.
    #[test]
    fn clock_roundtrip(seconds in 0u32..360_000) {
        let formatted = format_time(seconds as f64, false);
        prop_assert_eq!(parse_time(&formatted), seconds as f64);
    }

    /// Arbitrary strings never panic the parser.
    #[test]
    fn parse_total(input in ".*") {
        let _ = parse_time(&input);
    }

    /// Valid ranges inside the clip pass validation.
    #[test]
    fn inner_ranges_validate(start in 0.0f64..100.0, len in 0.2f64..100.0) {
        let end = start + len;
        let result = validate_trim_range(start, end, 200.0);
        prop_assert!(result.valid, "{:?}", result);
    }
}

#[test]
fn non_finite_input_formats_as_zero() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(format_time(value, false), "00:00");
        assert_eq!(format_time_with_milliseconds(value), "00:00.000");
        assert_eq!(format_duration_human(value), "0 seconds");
        assert_eq!(format_timecode(value, 30.0), "00:00:00:00");
    }
}

#[test]
fn parse_fallbacks() {
    assert_eq!(parse_time(""), 0.0);
    assert_eq!(parse_time("invalid"), 0.0);
    assert!(parse_time("99:99:99").is_nan());
}

#[test]
fn formatted_with_milliseconds_parses_back() {
    let formatted = format_time_with_milliseconds(125.5);
    assert_eq!(formatted, "02:05.500");
    assert_eq!(parse_time(&formatted), 125.5);
}

#[test]
fn timecode_examples() {
    assert_eq!(format_timecode(1.5, 30.0), "00:00:01:15");
    assert_eq!(format_timecode(3661.0, 30.0), "01:01:01:00");
}
