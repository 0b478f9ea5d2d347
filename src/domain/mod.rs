// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`playback`]: Playback types ([`PlaybackState`](playback::PlaybackState),
//!   [`Volume`](playback::Volume), [`SkipStep`](playback::SkipStep),
//!   [`HideDelay`](playback::HideDelay))
//! - [`timeline`]: Markers and time arithmetic ([`Marker`](timeline::Marker),
//!   [`format_time`](timeline::format_time))

pub mod playback;
pub mod timeline;
