// SPDX-License-Identifier: MPL-2.0
//! Marker files for the demo host.
//!
//! Markers are read from a TOML file:
//!
//! ```toml
//! [[markers]]
//! id = "intro"
//! timestamp = 0.0
//! end_timestamp = 12.5
//! label = "Intro"
//! ```
//!
//! Values are passed through as-is; the player tolerates odd timestamps.

use crate::domain::timeline::{Marker, MarkerId};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct MarkersFile {
    #[serde(default)]
    markers: Vec<MarkerEntry>,
}

#[derive(Debug, Deserialize)]
struct MarkerEntry {
    id: String,
    timestamp: f64,
    #[serde(default)]
    end_timestamp: Option<f64>,
    #[serde(default)]
    label: Option<String>,
}

impl From<MarkerEntry> for Marker {
    fn from(entry: MarkerEntry) -> Self {
        Marker {
            id: MarkerId::new(entry.id),
            timestamp: entry.timestamp,
            end_timestamp: entry.end_timestamp,
            label: entry.label,
        }
    }
}

/// Parses markers from TOML text.
pub fn parse_markers(content: &str) -> Result<Vec<Marker>> {
    let file: MarkersFile =
        toml::from_str(content).map_err(|err| Error::Markers(err.to_string()))?;
    Ok(file.markers.into_iter().map(Marker::from).collect())
}

/// Loads markers from a TOML file.
pub fn load_markers(path: &Path) -> Result<Vec<Marker>> {
    let content = fs::read_to_string(path)?;
    parse_markers(&content)
}
