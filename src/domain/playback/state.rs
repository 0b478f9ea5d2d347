// SPDX-License-Identifier: MPL-2.0
//! Playback state owned by the player container.
//!
//! Transitions here are pure: they never talk to a media element. The
//! container applies them first and then mirrors the result onto its element.

use super::newtypes::{SkipStep, Volume};
use crate::domain::timeline::clamp;

/// Direction of a skip button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    Backward,
    Forward,
}

/// Mirror of the media element's state as shown by the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Whether playback is (optimistically) running.
    pub is_playing: bool,
    /// Current position in seconds.
    pub current_time: f64,
    /// Total length in seconds; `0.0` while unknown.
    pub duration: f64,
    /// Volume level preserved across mute.
    pub volume: Volume,
    /// Whether output is muted.
    pub is_muted: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: Volume::default(),
            is_muted: false,
        }
    }
}

impl PlaybackState {
    /// Returns true once the element has reported a duration.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }

    /// Level actually sent to the element: silence while muted.
    #[must_use]
    pub fn effective_volume(&self) -> Volume {
        if self.is_muted {
            Volume::SILENT
        } else {
            self.volume
        }
    }

    /// Flips the playing flag.
    pub fn toggle_playing(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Sets a new volume level.
    ///
    /// Raising the level above silence while muted also unmutes.
    pub fn change_volume(&mut self, volume: Volume) {
        self.volume = volume;
        if volume.is_audible() && self.is_muted {
            self.is_muted = false;
        }
    }

    /// Flips the mute flag, leaving `volume` untouched.
    pub fn toggle_muted(&mut self) {
        self.is_muted = !self.is_muted;
    }

    /// Position reached by one skip in the given direction, bounded to `[0, duration]`.
    #[must_use]
    pub fn skip_target(&self, step: SkipStep, direction: SkipDirection) -> f64 {
        let delta = match direction {
            SkipDirection::Backward => -step.value(),
            SkipDirection::Forward => step.value(),
        };
        clamp(self.current_time + delta, 0.0, self.duration)
    }

    /// Resets position, duration and playing flag for a new source.
    ///
    /// Volume and mute are preferences and survive the reset.
    pub fn reset_for_source(&mut self) {
        self.is_playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn loaded(current_time: f64, duration: f64) -> PlaybackState {
        PlaybackState {
            current_time,
            duration,
            ..PlaybackState::default()
        }
    }

    #[test]
    fn default_is_paused_at_start_with_unknown_duration() {
        let state = PlaybackState::default();
        assert!(!state.is_playing);
        assert!(!state.has_duration());
        assert!(!state.is_muted);
        assert_abs_diff_eq!(state.volume.value(), 1.0);
    }

    #[test]
    fn skip_forward_near_end_clamps_to_duration() {
        let state = loaded(115.0, 120.0);
        let target = state.skip_target(SkipStep::default(), SkipDirection::Forward);
        assert_abs_diff_eq!(target, 120.0);
    }

    #[test]
    fn skip_backward_near_start_clamps_to_zero() {
        let state = loaded(5.0, 120.0);
        let target = state.skip_target(SkipStep::default(), SkipDirection::Backward);
        assert_abs_diff_eq!(target, 0.0);
    }

    #[test]
    fn skip_with_unknown_duration_collapses_to_zero() {
        let state = loaded(0.0, 0.0);
        assert_abs_diff_eq!(
            state.skip_target(SkipStep::default(), SkipDirection::Forward),
            0.0
        );
    }

    #[test]
    fn skip_uses_configured_step() {
        let state = loaded(30.0, 120.0);
        assert_abs_diff_eq!(
            state.skip_target(SkipStep::new(15.0), SkipDirection::Forward),
            45.0
        );
        assert_abs_diff_eq!(
            state.skip_target(SkipStep::new(15.0), SkipDirection::Backward),
            15.0
        );
    }

    #[test]
    fn mute_round_trip_preserves_volume() {
        let mut state = PlaybackState::default();
        state.change_volume(Volume::new(0.6));

        state.toggle_muted();
        assert!(state.is_muted);
        assert_abs_diff_eq!(state.effective_volume().value(), 0.0);
        assert_abs_diff_eq!(state.volume.value(), 0.6);

        state.toggle_muted();
        assert!(!state.is_muted);
        assert_abs_diff_eq!(state.effective_volume().value(), 0.6);
    }

    #[test]
    fn raising_volume_while_muted_unmutes() {
        let mut state = PlaybackState {
            is_muted: true,
            ..PlaybackState::default()
        };
        state.change_volume(Volume::new(0.3));
        assert!(!state.is_muted);
        assert_abs_diff_eq!(state.volume.value(), 0.3);
    }

    #[test]
    fn zero_volume_while_muted_stays_muted() {
        let mut state = PlaybackState {
            is_muted: true,
            ..PlaybackState::default()
        };
        state.change_volume(Volume::new(0.0));
        assert!(state.is_muted);
    }

    #[test]
    fn reset_for_source_keeps_preferences() {
        let mut state = PlaybackState {
            is_playing: true,
            current_time: 42.0,
            duration: 100.0,
            volume: Volume::new(0.4),
            is_muted: true,
        };
        state.reset_for_source();
        assert!(!state.is_playing);
        assert_abs_diff_eq!(state.current_time, 0.0);
        assert!(!state.has_duration());
        assert!(state.is_muted);
        assert_abs_diff_eq!(state.volume.value(), 0.4);
    }
}
