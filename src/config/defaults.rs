// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume slider step.
pub const VOLUME_SLIDER_STEP: f32 = 0.01;

// ==========================================================================
// Skip Defaults
// ==========================================================================

/// Default distance covered by the skip buttons, in seconds.
pub const DEFAULT_SKIP_STEP_SECS: f64 = 10.0;

/// Minimum skip distance in seconds.
pub const MIN_SKIP_STEP_SECS: f64 = 1.0;

/// Maximum skip distance in seconds.
pub const MAX_SKIP_STEP_SECS: f64 = 60.0;

// ==========================================================================
// Seek Bar Defaults
// ==========================================================================

/// Seek slider maximum used while the duration is still unknown.
pub const SEEK_FALLBACK_MAX_SECS: f64 = 100.0;

/// Seek slider step in seconds (1ms precision).
pub const SEEK_SLIDER_STEP_SECS: f64 = 0.001;

// ==========================================================================
// Volume Slider Visibility
// ==========================================================================

/// Inactivity delay before the volume slider hides again (milliseconds).
pub const DEFAULT_VOLUME_SLIDER_HIDE_MS: u64 = 2000;

/// Shortest accepted hide delay (milliseconds).
pub const MIN_VOLUME_SLIDER_HIDE_MS: u64 = 250;

/// Longest accepted hide delay (milliseconds).
pub const MAX_VOLUME_SLIDER_HIDE_MS: u64 = 30_000;

// ==========================================================================
// Media Element
// ==========================================================================

/// Interval between position-changed events emitted by the clock element.
pub const CLOCK_TICK_MS: u64 = 250;

/// Length the clock element reports when no `--duration` is given (seconds).
pub const DEFAULT_SOURCE_DURATION_SECS: f64 = 180.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::playback::newtypes::{hide_delay_bounds, skip_step_bounds, volume_bounds};
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn domain_bounds_match_config() {
        assert_abs_diff_eq!(volume_bounds::MIN, MIN_VOLUME);
        assert_abs_diff_eq!(volume_bounds::MAX, MAX_VOLUME);
        assert_abs_diff_eq!(volume_bounds::DEFAULT, DEFAULT_VOLUME);
        assert_abs_diff_eq!(skip_step_bounds::MIN, MIN_SKIP_STEP_SECS);
        assert_abs_diff_eq!(skip_step_bounds::MAX, MAX_SKIP_STEP_SECS);
        assert_abs_diff_eq!(skip_step_bounds::DEFAULT, DEFAULT_SKIP_STEP_SECS);
        assert_eq!(hide_delay_bounds::MIN, MIN_VOLUME_SLIDER_HIDE_MS);
        assert_eq!(hide_delay_bounds::MAX, MAX_VOLUME_SLIDER_HIDE_MS);
        assert_eq!(hide_delay_bounds::DEFAULT, DEFAULT_VOLUME_SLIDER_HIDE_MS);
    }
}
