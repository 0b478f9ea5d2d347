// SPDX-License-Identifier: MPL-2.0
//! Timeline markers supplied by the host.

use std::fmt;

/// Identity of a marker, as chosen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(String);

impl MarkerId {
    /// Wraps a host-provided identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarkerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A point or range annotation on the audio timeline.
///
/// Markers are read-only to the player. Timestamps are not validated:
/// negative, overlapping or out-of-range values are rendered as well as
/// they can be.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    /// Start in seconds.
    pub timestamp: f64,
    /// End in seconds for range markers.
    pub end_timestamp: Option<f64>,
    /// Optional text shown in the marker tooltip.
    pub label: Option<String>,
}

impl Marker {
    /// Creates a point marker.
    #[must_use]
    pub fn point(id: impl Into<MarkerId>, timestamp: f64) -> Self {
        Self {
            id: id.into(),
            timestamp,
            end_timestamp: None,
            label: None,
        }
    }

    /// Creates a range marker spanning `[timestamp, end_timestamp]`.
    #[must_use]
    pub fn range(id: impl Into<MarkerId>, timestamp: f64, end_timestamp: f64) -> Self {
        Self {
            id: id.into(),
            timestamp,
            end_timestamp: Some(end_timestamp),
            label: None,
        }
    }

    /// Attaches a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn is_range(&self) -> bool {
        self.end_timestamp.is_some()
    }
}

impl From<String> for MarkerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_marker_has_no_end() {
        let marker = Marker::point("intro", 12.0);
        assert!(!marker.is_range());
        assert_eq!(marker.id.as_str(), "intro");
    }

    #[test]
    fn range_marker_keeps_end() {
        let marker = Marker::range("chorus", 30.0, 45.0).with_label("Chorus");
        assert!(marker.is_range());
        assert_eq!(marker.end_timestamp, Some(45.0));
        assert_eq!(marker.label.as_deref(), Some("Chorus"));
    }

    #[test]
    fn marker_id_displays_raw_value() {
        assert_eq!(MarkerId::new("m-1").to_string(), "m-1");
    }
}
