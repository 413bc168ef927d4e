//! Year chart UI rendering
//!
//! Bar chart of party A's national share per election year. Zooms and pans
//! horizontally only, and reports the hovered year to the store.

use eframe::egui;
use egui::Stroke;
use votemap::{AxisZoom, UiState, UiStore};

use crate::io::SampleElection;
use crate::presentation::color_mapping::{PARTY_A, PARTY_B};
use crate::ui::input::zoom_input_handler;

const AXIS_HEIGHT: f32 = 18.0;

/// Renders the year chart into a region of the given size.
pub fn render_chart_panel(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    store: &UiStore,
    state: &UiState,
    election: &SampleElection,
) {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

    let zoom = match zoom_input_handler::handle_axis_zoom_input(ui.ctx(), rect, &response, state.chart_x_zoom()) {
        Some(next) => {
            store.set_chart_x_zoom(next);
            next
        }
        None => state.chart_x_zoom(),
    };

    let slot = rect.width() / election.years.len().max(1) as f32;
    let hovered = response
        .hover_pos()
        .and_then(|pos| year_at(election, slot, zoom, pos.x - rect.min.x));
    if hovered != state.hovered_chart_year() {
        store.set_hovered_chart_year(hovered);
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let plot_bottom = rect.max.y - AXIS_HEIGHT;
    let plot_height = plot_bottom - rect.min.y;
    let mid_y = plot_bottom - plot_height * 0.5;

    for (i, total) in election.years.iter().enumerate() {
        let left = rect.min.x + zoom.apply(i as f64 * slot as f64) as f32;
        let width = slot * zoom.k as f32;
        if left + width < rect.min.x || left > rect.max.x {
            continue;
        }

        let top = plot_bottom - plot_height * total.share_a;
        let bar = egui::Rect::from_min_max(
            egui::pos2(left + width * 0.15, top),
            egui::pos2(left + width * 0.85, plot_bottom),
        );
        let color = if total.share_a >= 0.5 { PARTY_A } else { PARTY_B };
        let color = if Some(total.year) == hovered { color } else { color.gamma_multiply(0.6) };
        painter.rect_filled(bar, 2.0, color);

        painter.text(
            egui::pos2(left + width * 0.5, plot_bottom + 2.0),
            egui::Align2::CENTER_TOP,
            total.year.to_string(),
            egui::FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
    }

    painter.line_segment(
        [egui::pos2(rect.min.x, mid_y), egui::pos2(rect.max.x, mid_y)],
        Stroke::new(1.0, ui.visuals().weak_text_color()),
    );
}

/// Returns the year whose slot contains screen offset `x`, if any.
fn year_at(election: &SampleElection, slot: f32, zoom: AxisZoom, x: f32) -> Option<i32> {
    let position = zoom.invert(x as f64) / slot as f64;
    if position < 0.0 {
        return None;
    }
    election.years.get(position as usize).map(|total| total.year)
}
