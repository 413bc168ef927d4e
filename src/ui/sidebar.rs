//! Sidebar UI rendering
//!
//! Shows the current view transforms with reset controls, and the hovered year.

use eframe::egui;
use egui::RichText;
use votemap::{UiState, UiStore, ZoomTransform, AxisZoom};

/// Renders the sidebar contents.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `store` - The shared view-state store
/// * `state` - Snapshot of the view state taken at the start of the frame
pub fn render_sidebar(ui: &mut egui::Ui, store: &UiStore, state: &UiState) {
    ui.heading("View");
    ui.separator();

    ui.label(RichText::new("Map").strong());
    transform_row(ui, state.map_zoom());
    if ui.add_enabled(state.map_zoom() != ZoomTransform::IDENTITY, egui::Button::new("Reset map zoom")).clicked() {
        store.reset_map_zoom();
    }

    ui.add_space(8.0);
    ui.label(RichText::new("Ternary").strong());
    transform_row(ui, state.ternary_zoom());
    if ui.add_enabled(state.ternary_zoom() != ZoomTransform::IDENTITY, egui::Button::new("Reset ternary zoom")).clicked() {
        store.reset_ternary_zoom();
    }

    ui.add_space(8.0);
    ui.label(RichText::new("Chart").strong());
    let chart = state.chart_x_zoom();
    ui.monospace(format!("k {:.2}  x {:.0}", chart.k, chart.x));
    if ui.add_enabled(chart != AxisZoom::IDENTITY, egui::Button::new("Reset chart zoom")).clicked() {
        store.reset_chart_x_zoom();
    }

    ui.add_space(8.0);
    ui.separator();
    match state.hovered_chart_year() {
        Some(year) => ui.label(format!("Hovering {}", year)),
        None => ui.label(RichText::new("Hover the chart to inspect a year").weak()),
    };
}

fn transform_row(ui: &mut egui::Ui, t: ZoomTransform) {
    ui.monospace(format!("k {:.2}  x {:.0}  y {:.0}", t.k, t.x, t.y));
}
