//! Pan/zoom transforms for the chart panels.
//!
//! This module encapsulates the zoom transforms of the three zoomable panels
//! (ternary plot, map, and the horizontally zoomable year chart). Transforms
//! are small `Copy` values: panels compute a new transform from the old one
//! and store it back whole.

use serde::{Deserialize, Serialize};

/// A 2-D scale-and-translate transform.
///
/// A point `p` in panel coordinates is drawn at `p * k + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    /// Scale factor
    pub k: f64,
    /// Horizontal translation in pixels
    pub x: f64,
    /// Vertical translation in pixels
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform { k: 1.0, x: 0.0, y: 0.0 };

    pub fn new(k: f64, x: f64, y: f64) -> Self {
        Self { k, x, y }
    }

    /// Returns this transform panned by `(dx, dy)` screen pixels.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self { k: self.k, x: self.x + dx, y: self.y + dy }
    }

    /// Returns this transform scaled by `factor` around a screen point.
    ///
    /// The panel point under `focus` stays under `focus`.
    ///
    /// # Arguments
    /// * `factor` - Multiplicative zoom factor (>1 = zoom in, <1 = zoom out)
    /// * `focus` - Screen position to zoom around
    pub fn scaled_around(self, factor: f64, focus: (f64, f64)) -> Self {
        let (px, py) = self.invert(focus);
        let k = self.k * factor;
        Self {
            k,
            x: focus.0 - px * k,
            y: focus.1 - py * k,
        }
    }

    /// Maps a panel point to screen coordinates.
    pub fn apply(self, point: (f64, f64)) -> (f64, f64) {
        (point.0 * self.k + self.x, point.1 * self.k + self.y)
    }

    /// Maps a screen point back to panel coordinates.
    pub fn invert(self, point: (f64, f64)) -> (f64, f64) {
        ((point.0 - self.x) / self.k, (point.1 - self.y) / self.k)
    }
}

/// A horizontal-only scale-and-translate transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisZoom {
    /// Scale factor
    pub k: f64,
    /// Horizontal translation in pixels
    pub x: f64,
}

impl Default for AxisZoom {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AxisZoom {
    pub const IDENTITY: AxisZoom = AxisZoom { k: 1.0, x: 0.0 };

    pub fn new(k: f64, x: f64) -> Self {
        Self { k, x }
    }

    pub fn translated(self, dx: f64) -> Self {
        Self { k: self.k, x: self.x + dx }
    }

    /// Returns this transform scaled by `factor` around screen position `focus_x`.
    pub fn scaled_around(self, factor: f64, focus_x: f64) -> Self {
        let px = self.invert(focus_x);
        let k = self.k * factor;
        Self { k, x: focus_x - px * k }
    }

    pub fn apply(self, value: f64) -> f64 {
        value * self.k + self.x
    }

    pub fn invert(self, value: f64) -> f64 {
        (value - self.x) / self.k
    }
}

/// State holding the zoom transform of every zoomable panel.
///
/// Responsibilities:
/// - Replacing a panel's transform as a whole
/// - Resetting a panel back to the identity transform
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportState {
    ternary_zoom: ZoomTransform,
    map_zoom: ZoomTransform,
    chart_x_zoom: AxisZoom,
}

impl ViewportState {
    /// Creates a new viewport state with every panel at identity.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Viewport Queries =====

    pub fn ternary_zoom(&self) -> ZoomTransform {
        self.ternary_zoom
    }

    pub fn map_zoom(&self) -> ZoomTransform {
        self.map_zoom
    }

    pub fn chart_x_zoom(&self) -> AxisZoom {
        self.chart_x_zoom
    }

    // ===== Viewport Mutations =====

    pub fn set_ternary_zoom(&mut self, transform: ZoomTransform) {
        self.ternary_zoom = transform;
    }

    pub fn reset_ternary_zoom(&mut self) {
        self.ternary_zoom = ZoomTransform::IDENTITY;
    }

    pub fn set_map_zoom(&mut self, transform: ZoomTransform) {
        self.map_zoom = transform;
    }

    pub fn reset_map_zoom(&mut self) {
        self.map_zoom = ZoomTransform::IDENTITY;
    }

    pub fn set_chart_x_zoom(&mut self, zoom: AxisZoom) {
        self.chart_x_zoom = zoom;
    }

    pub fn reset_chart_x_zoom(&mut self) {
        self.chart_x_zoom = AxisZoom::IDENTITY;
    }
}
