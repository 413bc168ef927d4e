//! Centralized view state for the election map viewer.
//!
//! `UiState` composes the focused state components from [`crate::state`] and
//! exposes one intent-revealing mutator per field (or small field group).
//! Each component keeps its own coupling rules local: the map state resets
//! the color mode when entering dot-density mode, the layout state keeps the
//! sidebar consistent with the mobile flag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::{
    AxisZoom, LayoutState, MapState, MapType, SelectionState, ViewportState, ZoomTransform,
};

/// Identifies one observable field of [`UiState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiField {
    MapType,
    MapColorMode,
    VotesPerDot,
    SidebarOpen,
    IsMobile,
    TernaryZoom,
    MapZoom,
    ChartXZoom,
    HoveredChartYear,
}

impl UiField {
    pub const ALL: [UiField; 9] = [
        UiField::MapType,
        UiField::MapColorMode,
        UiField::VotesPerDot,
        UiField::SidebarOpen,
        UiField::IsMobile,
        UiField::TernaryZoom,
        UiField::MapZoom,
        UiField::ChartXZoom,
        UiField::HoveredChartYear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UiField::MapType => "map_type",
            UiField::MapColorMode => "map_color_mode",
            UiField::VotesPerDot => "votes_per_dot",
            UiField::SidebarOpen => "sidebar_open",
            UiField::IsMobile => "is_mobile",
            UiField::TernaryZoom => "ternary_zoom",
            UiField::MapZoom => "map_zoom",
            UiField::ChartXZoom => "chart_x_zoom",
            UiField::HoveredChartYear => "hovered_chart_year",
        }
    }
}

impl fmt::Display for UiField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// View state composed of focused state components.
///
/// Created once per session with fixed defaults and never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UiState {
    /// Map rendering mode, color mode and dot scale
    pub map: MapState,

    /// Sidebar and responsive flag
    pub layout: LayoutState,

    /// Zoom transforms of the ternary, map and chart panels
    pub viewport: ViewportState,

    /// Chart hover
    pub selection: SelectionState,
}

impl UiState {
    /// Creates a new view state with default values.
    pub fn new() -> Self {
        Self {
            map: MapState::new(),
            layout: LayoutState::new(),
            viewport: ViewportState::new(),
            selection: SelectionState::new(),
        }
    }

    // ===== Queries =====

    pub fn map_type(&self) -> MapType {
        self.map.map_type()
    }

    pub fn map_color_mode(&self) -> &str {
        self.map.map_color_mode()
    }

    pub fn votes_per_dot(&self) -> f64 {
        self.map.votes_per_dot()
    }

    pub fn sidebar_open(&self) -> bool {
        self.layout.sidebar_open()
    }

    pub fn is_mobile(&self) -> bool {
        self.layout.is_mobile()
    }

    pub fn ternary_zoom(&self) -> ZoomTransform {
        self.viewport.ternary_zoom()
    }

    pub fn map_zoom(&self) -> ZoomTransform {
        self.viewport.map_zoom()
    }

    pub fn chart_x_zoom(&self) -> AxisZoom {
        self.viewport.chart_x_zoom()
    }

    pub fn hovered_chart_year(&self) -> Option<i32> {
        self.selection.hovered_chart_year()
    }

    // ===== Mutations =====

    /// Sets the map type; switching to dots resets the color mode to "winner".
    pub fn set_map_type(&mut self, map_type: MapType) {
        self.map.set_map_type(map_type);
    }

    pub fn set_map_color_mode(&mut self, mode: impl Into<String>) {
        self.map.set_map_color_mode(mode);
    }

    pub fn set_votes_per_dot(&mut self, value: f64) {
        self.map.set_votes_per_dot(value);
    }

    pub fn toggle_sidebar(&mut self) {
        self.layout.toggle_sidebar();
    }

    /// Sets the mobile flag; the sidebar is forced to `!is_mobile`.
    pub fn set_is_mobile(&mut self, is_mobile: bool) {
        self.layout.set_is_mobile(is_mobile);
    }

    pub fn set_ternary_zoom(&mut self, transform: ZoomTransform) {
        self.viewport.set_ternary_zoom(transform);
    }

    pub fn reset_ternary_zoom(&mut self) {
        self.viewport.reset_ternary_zoom();
    }

    pub fn set_map_zoom(&mut self, transform: ZoomTransform) {
        self.viewport.set_map_zoom(transform);
    }

    pub fn reset_map_zoom(&mut self) {
        self.viewport.reset_map_zoom();
    }

    pub fn set_chart_x_zoom(&mut self, zoom: AxisZoom) {
        self.viewport.set_chart_x_zoom(zoom);
    }

    pub fn reset_chart_x_zoom(&mut self) {
        self.viewport.reset_chart_x_zoom();
    }

    pub fn set_hovered_chart_year(&mut self, year: Option<i32>) {
        self.selection.set_hovered_chart_year(year);
    }

    // ===== Change Detection =====

    /// Returns the fields whose values differ between `self` and `other`.
    ///
    /// Floats compare by bit pattern: a NaN left in place is unchanged, and
    /// `0.0` vs `-0.0` counts as a change.
    pub fn changed_fields(&self, other: &UiState) -> Vec<UiField> {
        UiField::ALL
            .into_iter()
            .filter(|field| !self.field_eq(other, *field))
            .collect()
    }

    fn field_eq(&self, other: &UiState, field: UiField) -> bool {
        match field {
            UiField::MapType => self.map_type() == other.map_type(),
            UiField::MapColorMode => self.map_color_mode() == other.map_color_mode(),
            UiField::VotesPerDot => same_bits(self.votes_per_dot(), other.votes_per_dot()),
            UiField::SidebarOpen => self.sidebar_open() == other.sidebar_open(),
            UiField::IsMobile => self.is_mobile() == other.is_mobile(),
            UiField::TernaryZoom => same_transform(self.ternary_zoom(), other.ternary_zoom()),
            UiField::MapZoom => same_transform(self.map_zoom(), other.map_zoom()),
            UiField::ChartXZoom => {
                let (a, b) = (self.chart_x_zoom(), other.chart_x_zoom());
                same_bits(a.k, b.k) && same_bits(a.x, b.x)
            }
            UiField::HoveredChartYear => self.hovered_chart_year() == other.hovered_chart_year(),
        }
    }
}

fn same_bits(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}

fn same_transform(a: ZoomTransform, b: ZoomTransform) -> bool {
    same_bits(a.k, b.k) && same_bits(a.x, b.x) && same_bits(a.y, b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = UiState::new();
        assert_eq!(state.map_type(), MapType::Choropleth);
        assert_eq!(state.map_color_mode(), "winner");
        assert!(state.sidebar_open());
        assert!(!state.is_mobile());
        assert_eq!(state.ternary_zoom(), ZoomTransform::IDENTITY);
        assert_eq!(state.map_zoom(), ZoomTransform::IDENTITY);
        assert_eq!(state.chart_x_zoom(), AxisZoom::IDENTITY);
        assert_eq!(state.hovered_chart_year(), None);
        assert_eq!(state, UiState::default());
    }

    #[test]
    fn test_changed_fields_reports_coupled_fields() {
        let mut before = UiState::new();
        before.set_map_color_mode("margin");
        let mut after = before.clone();
        after.set_map_type(MapType::Dots);
        assert_eq!(
            before.changed_fields(&after),
            vec![UiField::MapType, UiField::MapColorMode]
        );

        let before = after.clone();
        after.set_is_mobile(true);
        assert_eq!(
            before.changed_fields(&after),
            vec![UiField::SidebarOpen, UiField::IsMobile]
        );
    }

    #[test]
    fn test_changed_fields_empty_for_noop() {
        let mut state = UiState::new();
        let before = state.clone();
        state.reset_map_zoom();
        state.set_map_color_mode("winner");
        assert!(before.changed_fields(&state).is_empty());
    }

    #[test]
    fn test_nan_counts_as_changed_only_when_written() {
        let before = UiState::new();
        let mut after = before.clone();
        after.set_votes_per_dot(f64::NAN);
        assert_eq!(before.changed_fields(&after), vec![UiField::VotesPerDot]);

        // NaN left in place is not a change
        let before = after.clone();
        after.toggle_sidebar();
        assert_eq!(before.changed_fields(&after), vec![UiField::SidebarOpen]);

        let mut nan_zoom = UiState::new();
        nan_zoom.set_map_zoom(ZoomTransform::new(f64::NAN, 0.0, 0.0));
        assert!(nan_zoom.changed_fields(&nan_zoom.clone()).is_empty());
    }
}
