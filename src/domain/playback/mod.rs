// SPDX-License-Identifier: MPL-2.0
//! Playback domain types.
//!
//! Value objects and the playback state mirror, independent of any
//! presentation or media backend.

pub mod newtypes;
pub mod state;

pub use newtypes::{HideDelay, SkipStep, Volume};
pub use state::{PlaybackState, SkipDirection};
