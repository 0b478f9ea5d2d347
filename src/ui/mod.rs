// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`player`] - Audio player with progress bar, playback and volume controls
//! - [`styles`] - Centralized styling (buttons, containers, sliders, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod player;
pub mod styles;
pub mod theming;
