//! Ternary plot UI rendering
//!
//! Plots every region's three-way split (party A, party B, others) inside a
//! triangle, under the ternary zoom transform.

use eframe::egui;
use egui::{Pos2, Stroke};
use votemap::{UiState, UiStore};

use crate::io::{RegionResult, SampleElection};
use crate::presentation::color_mapping;
use crate::ui::input::zoom_input_handler;

const POINT_RADIUS: f32 = 3.0;
const MARGIN: f32 = 16.0;

/// Renders the ternary plot into a region of the given size.
pub fn render_ternary_panel(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    store: &UiStore,
    state: &UiState,
    election: &SampleElection,
) {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

    let transform = match zoom_input_handler::handle_zoom_input(ui.ctx(), rect, &response, state.ternary_zoom()) {
        Some(next) => {
            store.set_ternary_zoom(next);
            next
        }
        None => state.ternary_zoom(),
    };

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let side = (rect.width() - 2.0 * MARGIN).min((rect.height() - 2.0 * MARGIN) / 0.866).max(1.0);
    let to_screen = |p: (f32, f32)| -> Pos2 {
        let (sx, sy) = transform.apply((p.0 as f64, p.1 as f64));
        rect.min + egui::vec2(sx as f32, sy as f32)
    };

    let [a, b, other] = triangle(side);
    let outline = Stroke::new(1.0, ui.visuals().weak_text_color());
    painter.line_segment([to_screen(a), to_screen(b)], outline);
    painter.line_segment([to_screen(b), to_screen(other)], outline);
    painter.line_segment([to_screen(other), to_screen(a)], outline);

    for region in &election.regions {
        let point = barycentric(side, &region.result);
        painter.circle_filled(to_screen(point), POINT_RADIUS, color_mapping::winner_color(&region.result));
    }
}

/// Triangle vertices in panel coordinates: party A, party B, others.
fn triangle(side: f32) -> [(f32, f32); 3] {
    let height = side * 0.866;
    [
        (MARGIN, MARGIN + height),
        (MARGIN + side, MARGIN + height),
        (MARGIN + side / 2.0, MARGIN),
    ]
}

/// Position of a region's split inside the triangle.
fn barycentric(side: f32, result: &RegionResult) -> (f32, f32) {
    let [a, b, other] = triangle(side);
    let total = (result.share_a + result.share_b + result.share_other).max(f32::EPSILON);
    let (wa, wb, wo) = (result.share_a / total, result.share_b / total, result.share_other / total);
    (
        a.0 * wa + b.0 * wb + other.0 * wo,
        a.1 * wa + b.1 * wb + other.1 * wo,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_splits_land_on_vertices() {
        let side = 100.0;
        let [a, _, other] = triangle(side);
        let all_a = RegionResult { share_a: 1.0, share_b: 0.0, share_other: 0.0, turnout: 0.5, votes: 1 };
        assert_eq!(barycentric(side, &all_a), a);
        let all_other = RegionResult { share_a: 0.0, share_b: 0.0, share_other: 1.0, turnout: 0.5, votes: 1 };
        assert_eq!(barycentric(side, &all_other), other);
    }
}
