// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 1.0;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use iced_cue::domain::playback::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Silence.
    pub const SILENT: Self = Self(volume_bounds::MIN);

    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN collapses to silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self::SILENT;
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the level is above silence.
    #[must_use]
    pub fn is_audible(self) -> bool {
        self.0 > volume_bounds::MIN
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Skip step bounds (1 to 60 seconds).
pub mod skip_step_bounds {
    /// Minimum skip step in seconds.
    pub const MIN: f64 = 1.0;
    /// Maximum skip step in seconds.
    pub const MAX: f64 = 60.0;
    /// Default skip step in seconds.
    pub const DEFAULT: f64 = 10.0;
}

/// Distance covered by the skip backward/forward buttons, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(skip_step_bounds::MIN, skip_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(skip_step_bounds::DEFAULT)
    }
}

// =============================================================================
// HideDelay
// =============================================================================

/// Volume slider hide delay bounds, in milliseconds.
pub mod hide_delay_bounds {
    /// Shortest delay.
    pub const MIN: u64 = 250;
    /// Longest delay.
    pub const MAX: u64 = 30_000;
    /// Default delay.
    pub const DEFAULT: u64 = 2_000;
}

/// Inactivity delay after which the volume slider hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new hide delay from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(hide_delay_bounds::MIN, hide_delay_bounds::MAX))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(hide_delay_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamps_to_valid_range() {
        assert!((Volume::new(-0.5).value() - volume_bounds::MIN).abs() < f32::EPSILON);
        assert!((Volume::new(2.0).value() - volume_bounds::MAX).abs() < f32::EPSILON);
        assert!((Volume::new(0.5).value() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn volume_nan_is_silent() {
        assert_eq!(Volume::new(f32::NAN), Volume::SILENT);
    }

    #[test]
    fn volume_default_is_full() {
        assert!((Volume::default().value() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn volume_audible_above_zero() {
        assert!(!Volume::new(0.0).is_audible());
        assert!(Volume::new(0.01).is_audible());
    }

    #[test]
    fn skip_step_clamps_to_valid_range() {
        assert!((SkipStep::new(0.0).value() - skip_step_bounds::MIN).abs() < 0.001);
        assert!((SkipStep::new(600.0).value() - skip_step_bounds::MAX).abs() < 0.001);
        assert!((SkipStep::new(15.0).value() - 15.0).abs() < 0.001);
        assert_eq!(SkipStep::new(f64::NAN), SkipStep::default());
    }

    #[test]
    fn skip_step_default_is_ten_seconds() {
        assert!((SkipStep::default().value() - 10.0).abs() < 0.001);
    }

    #[test]
    fn hide_delay_clamps_and_converts() {
        assert_eq!(HideDelay::from_millis(0).as_millis(), hide_delay_bounds::MIN);
        assert_eq!(
            HideDelay::from_millis(u64::MAX).as_millis(),
            hide_delay_bounds::MAX
        );
        assert_eq!(
            HideDelay::default().as_duration(),
            Duration::from_secs(2)
        );
    }
}
