// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the player.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded in the binary.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Named arguments in translated strings
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;

pub use fluent::I18n;
