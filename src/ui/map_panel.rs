//! Map panel UI rendering
//!
//! Draws the sample regions as a choropleth grid, a hexagon cartogram or a
//! dot-density map, under the map zoom transform.

use eframe::egui;
use egui::{Color32, Pos2, Stroke};
use votemap::{MapType, UiState, UiStore, ZoomTransform};

use crate::io::{Region, SampleElection};
use crate::presentation::color_mapping::{self, PARTY_A, PARTY_B};
use crate::ui::input::zoom_input_handler;

/// Cap on dots drawn per region, so tiny `votes_per_dot` values stay drawable.
const MAX_DOTS_PER_REGION: usize = 400;
const DOT_RADIUS: f32 = 1.2;

/// Renders the map panel into a region of the given size.
pub fn render_map_panel(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    store: &UiStore,
    state: &UiState,
    election: &SampleElection,
) {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

    let transform = match zoom_input_handler::handle_zoom_input(ui.ctx(), rect, &response, state.map_zoom()) {
        Some(next) => {
            store.set_map_zoom(next);
            next
        }
        None => state.map_zoom(),
    };

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let cell = (rect.width() / election.cols as f32).min(rect.height() / election.rows as f32);
    let to_screen = |x: f32, y: f32| -> Pos2 {
        let (sx, sy) = transform.apply((x as f64, y as f64));
        rect.min + egui::vec2(sx as f32, sy as f32)
    };
    let scaled_cell = cell * transform.k as f32;

    for (index, region) in election.regions.iter().enumerate() {
        match state.map_type() {
            MapType::Choropleth => {
                let center = to_screen((region.col as f32 + 0.5) * cell, (region.row as f32 + 0.5) * cell);
                let color = color_mapping::region_color(state.map_color_mode(), &region.result);
                let cell_rect = egui::Rect::from_center_size(center, egui::vec2(scaled_cell, scaled_cell));
                painter.rect_filled(cell_rect.shrink(0.5), 0.0, color);
            }
            MapType::Hex => {
                let offset = if region.row % 2 == 1 { 0.5 } else { 0.0 };
                let center = to_screen((region.col as f32 + 0.5 + offset) * cell, (region.row as f32 + 0.5) * cell * 0.9);
                let color = color_mapping::region_color(state.map_color_mode(), &region.result);
                painter.add(egui::Shape::convex_polygon(
                    hexagon(center, scaled_cell * 0.55),
                    color,
                    Stroke::new(0.5, Color32::from_black_alpha(80)),
                ));
            }
            MapType::Dots => {
                draw_region_dots(&painter, region, index, cell, state.votes_per_dot(), &to_screen);
            }
        }
    }

    if transform != ZoomTransform::IDENTITY {
        painter.text(
            rect.right_top() + egui::vec2(-6.0, 6.0),
            egui::Align2::RIGHT_TOP,
            format!("{:.1}x", transform.k),
            egui::FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
        );
    }
}

fn hexagon(center: Pos2, radius: f32) -> Vec<Pos2> {
    (0..6)
        .map(|i| {
            let angle = std::f32::consts::FRAC_PI_3 * i as f32 + std::f32::consts::FRAC_PI_6;
            center + egui::vec2(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Number of dots drawn for a region at the given scale.
fn dot_count(votes: u32, votes_per_dot: f64) -> usize {
    if votes_per_dot > 0.0 {
        ((votes as f64 / votes_per_dot).round() as usize).min(MAX_DOTS_PER_REGION)
    } else {
        MAX_DOTS_PER_REGION
    }
}

fn draw_region_dots(
    painter: &egui::Painter,
    region: &Region,
    index: usize,
    cell: f32,
    votes_per_dot: f64,
    to_screen: &impl Fn(f32, f32) -> Pos2,
) {
    let count = dot_count(region.result.votes, votes_per_dot);
    let a_dots = (count as f32 * region.result.two_party_share_a()).round() as usize;

    // Cheap deterministic jitter so dots stay put between frames
    let mut seed = (index as u32).wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut next = || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        (seed % 10_000) as f32 / 10_000.0
    };

    for i in 0..count {
        let x = (region.col as f32 + next()) * cell;
        let y = (region.row as f32 + next()) * cell;
        let color = if i < a_dots { PARTY_A } else { PARTY_B };
        painter.circle_filled(to_screen(x, y), DOT_RADIUS, color);
    }
}
