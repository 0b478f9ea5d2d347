// SPDX-License-Identifier: MPL-2.0
//! `iced_cue` is an audio player widget built with the Iced GUI framework.
//!
//! It pairs a seekable progress bar carrying timeline markers with playback
//! and volume controls, and keeps a native media element in sync with the
//! widget's state.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
