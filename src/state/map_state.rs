//! Map rendering state management.
//!
//! This module encapsulates the state that decides how the map panel is drawn:
//! the rendering mode, the color-coding scheme and the dot-density scale.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Color mode forced when switching into dot-density rendering.
pub const DEFAULT_COLOR_MODE: &str = "winner";

/// Default number of votes represented by a single dot.
pub const DEFAULT_VOTES_PER_DOT: f64 = 1000.0;

/// Map rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    /// Regions filled by result
    #[default]
    Choropleth,
    /// Dot-density rendering, one dot per `votes_per_dot` votes
    Dots,
    /// Equal-area hexagon cartogram
    Hex,
}

impl MapType {
    /// All map types in display order.
    pub const ALL: [MapType; 3] = [MapType::Choropleth, MapType::Dots, MapType::Hex];

    /// Returns the lowercase identifier used in config and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MapType::Choropleth => "choropleth",
            MapType::Dots => "dots",
            MapType::Hex => "hex",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        MapType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("Unknown map type '{}' (expected choropleth, dots or hex)", s))
    }
}

/// State related to map rendering.
///
/// Responsibilities:
/// - Tracking the active rendering mode
/// - Tracking the color mode, kept as an open identifier
/// - Keeping the color mode usable when entering dot-density mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapState {
    map_type: MapType,
    map_color_mode: String,
    votes_per_dot: f64,
}

impl Default for MapState {
    fn default() -> Self {
        Self::new()
    }
}

impl MapState {
    /// Creates a new map state with default values.
    pub fn new() -> Self {
        Self {
            map_type: MapType::Choropleth,
            map_color_mode: DEFAULT_COLOR_MODE.to_string(),
            votes_per_dot: DEFAULT_VOTES_PER_DOT,
        }
    }

    // ===== Map Queries =====

    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    pub fn map_color_mode(&self) -> &str {
        &self.map_color_mode
    }

    pub fn votes_per_dot(&self) -> f64 {
        self.votes_per_dot
    }

    // ===== Map Mutations =====

    /// Sets the rendering mode.
    ///
    /// Dot-density rendering only supports the default color mode, so switching
    /// to [`MapType::Dots`] resets the color mode to [`DEFAULT_COLOR_MODE`].
    /// Other modes leave the color mode untouched.
    pub fn set_map_type(&mut self, map_type: MapType) {
        self.map_type = map_type;
        if map_type == MapType::Dots {
            self.map_color_mode = DEFAULT_COLOR_MODE.to_string();
        }
    }

    /// Sets the color mode verbatim. No check against the current map type.
    pub fn set_map_color_mode(&mut self, mode: impl Into<String>) {
        self.map_color_mode = mode.into();
    }

    /// Sets the dot-density scale verbatim.
    pub fn set_votes_per_dot(&mut self, value: f64) {
        self.votes_per_dot = value;
    }
}
