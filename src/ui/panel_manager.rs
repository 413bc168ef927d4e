//! Panel orchestration and layout management.
//!
//! Lays out header, sidebar and the three visualization panels. The desktop
//! layout puts the map on top with the ternary plot and chart side by side
//! below it; the mobile layout stacks everything in one column.

use votemap::{UiConfig, UiStore};

use crate::io::SampleElection;
use crate::ui::{chart_panel, header, map_panel, sidebar, ternary_panel};

const SIDEBAR_WIDTH: f32 = 220.0;
const PANEL_GAP: f32 = 6.0;

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Reads one snapshot of the view state per frame; every change made by a
    /// panel goes through the store and shows up in the next frame's snapshot.
    pub fn render_all_panels(
        ctx: &egui::Context,
        store: &UiStore,
        config: &UiConfig,
        election: &SampleElection,
    ) {
        let state = store.snapshot();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::render_header(ui, store, &state, config);
        });

        if state.sidebar_open() {
            egui::SidePanel::left("sidebar")
                .default_width(SIDEBAR_WIDTH)
                .resizable(!state.is_mobile())
                .show(ctx, |ui| {
                    sidebar::render_sidebar(ui, store, &state);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            ui.spacing_mut().item_spacing = egui::vec2(PANEL_GAP, PANEL_GAP);

            if state.is_mobile() {
                let height = ((available.y - 2.0 * PANEL_GAP) / 3.0).max(0.0);
                let size = egui::vec2(available.x, height);
                map_panel::render_map_panel(ui, size, store, &state, election);
                ternary_panel::render_ternary_panel(ui, size, store, &state, election);
                chart_panel::render_chart_panel(ui, size, store, &state, election);
            } else {
                let map_height = ((available.y - PANEL_GAP) * 0.6).max(0.0);
                map_panel::render_map_panel(ui, egui::vec2(available.x, map_height), store, &state, election);

                let lower = egui::vec2(
                    ((available.x - PANEL_GAP) / 2.0).max(0.0),
                    (available.y - map_height - PANEL_GAP).max(0.0),
                );
                ui.horizontal(|ui| {
                    ternary_panel::render_ternary_panel(ui, lower, store, &state, election);
                    chart_panel::render_chart_panel(ui, lower, store, &state, election);
                });
            }
        });
    }
}
