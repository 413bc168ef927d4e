//! Header panel UI rendering
//!
//! Handles the top bar with the sidebar toggle and the map rendering controls.

use eframe::egui;
use votemap::{MapType, UiConfig, UiState, UiStore};

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `store` - The shared view-state store
/// * `state` - Snapshot of the view state taken at the start of the frame
/// * `config` - UI configuration (offered color modes)
pub fn render_header(ui: &mut egui::Ui, store: &UiStore, state: &UiState, config: &UiConfig) {
    ui.horizontal(|ui| {
        let sidebar_label = if state.sidebar_open() { "◀ Sidebar" } else { "▶ Sidebar" };
        if ui.button(sidebar_label).clicked() {
            store.toggle_sidebar();
        }

        ui.separator();

        let mut map_type = state.map_type();
        egui::ComboBox::from_id_salt("map_type")
            .selected_text(map_type.to_string())
            .show_ui(ui, |ui| {
                for option in MapType::ALL {
                    ui.selectable_value(&mut map_type, option, option.to_string());
                }
            });
        if map_type != state.map_type() {
            store.set_map_type(map_type);
        }

        // The selector offers the configured modes but shows whatever is set
        egui::ComboBox::from_id_salt("map_color_mode")
            .selected_text(state.map_color_mode())
            .show_ui(ui, |ui| {
                for mode in &config.color_modes {
                    let selected = mode == state.map_color_mode();
                    if ui.selectable_label(selected, mode.as_str()).clicked() && !selected {
                        store.set_map_color_mode(mode.as_str());
                    }
                }
            });

        if state.map_type() == MapType::Dots {
            ui.separator();
            ui.label("Votes per dot:");
            let mut votes_per_dot = state.votes_per_dot();
            let response = ui.add(egui::DragValue::new(&mut votes_per_dot).speed(10.0));
            if response.changed() {
                store.set_votes_per_dot(votes_per_dot);
            }
        }

        if state.is_mobile() {
            ui.separator();
            ui.label("📱 Mobile layout");
        }
    });
}
