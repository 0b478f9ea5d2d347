// SPDX-License-Identifier: MPL-2.0
//! Timeline types: markers and the time/percentage arithmetic.

pub mod marker;
pub mod position;

pub use marker::{Marker, MarkerId};
pub use position::{calculate_marker_position, calculate_range_width, clamp, format_time};
