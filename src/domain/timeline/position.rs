// SPDX-License-Identifier: MPL-2.0
//! Numeric helpers shared by the progress bar and the player container.
//!
//! None of these sanitize their input. Callers are expected to pass finite,
//! non-negative times; out-of-range markers produce out-of-range percentages.

/// Formats a position as `M:SS`.
///
/// Minutes are not rolled over into hours, so one hour renders as `60:00`.
///
/// # Examples
///
/// ```
/// use iced_cue::domain::timeline::format_time;
///
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(3600.0), "60:00");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as i64;
    let secs = (seconds % 60.0).floor() as i64;
    format!("{}:{:02}", minutes, secs)
}

/// Horizontal offset of a marker as a percentage of the timeline.
///
/// Returns `0.0` when the duration is unknown (`<= 0`).
#[must_use]
pub fn calculate_marker_position(timestamp: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    timestamp / duration * 100.0
}

/// Width of a range marker as a percentage of the timeline.
///
/// Returns `0.0` when the duration is unknown. An end before the start
/// yields a negative width.
#[must_use]
pub fn calculate_range_width(start: f64, end: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    (end - start) / duration * 100.0
}

/// Bounds `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the result is `min`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}
