//! Pan/zoom input handling for the zoomable panels.
//!
//! - Drag pans (left mouse + drag)
//! - Mouse wheel zooms around the cursor
//! - Double click resets to identity
//!
//! Handlers never mutate state. They return the replacement transform, and the
//! caller hands it to the store as a whole.

use eframe::egui;
use votemap::{AxisZoom, ZoomTransform};

/// Zoom speed per scroll pixel (exponential, so zoom in/out are symmetric).
const WHEEL_ZOOM_SPEED: f64 = 0.002;

fn scroll_y(ctx: &egui::Context) -> f32 {
    ctx.input(|i| {
        if i.raw_scroll_delta.y != 0.0 {
            i.raw_scroll_delta.y
        } else {
            i.smooth_scroll_delta.y
        }
    })
}

/// Computes the next 2-D transform for a panel from this frame's input.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `canvas_rect` - The panel rectangle; transforms are relative to its top-left
/// * `response` - The panel interaction response
/// * `transform` - The panel's current transform
///
/// # Returns
/// The new transform, or `None` if the input did not change it
pub fn handle_zoom_input(
    ctx: &egui::Context,
    canvas_rect: egui::Rect,
    response: &egui::Response,
    transform: ZoomTransform,
) -> Option<ZoomTransform> {
    if response.double_clicked() {
        return (transform != ZoomTransform::IDENTITY).then_some(ZoomTransform::IDENTITY);
    }

    let mut next = transform;

    if response.dragged() {
        let delta = response.drag_delta();
        next = next.translated(delta.x as f64, delta.y as f64);
    }

    if let Some(pos) = response.hover_pos() {
        let scroll = scroll_y(ctx);
        if scroll != 0.0 {
            let factor = (scroll as f64 * WHEEL_ZOOM_SPEED).exp();
            let focus = ((pos.x - canvas_rect.min.x) as f64, (pos.y - canvas_rect.min.y) as f64);
            next = next.scaled_around(factor, focus);
        }
    }

    (next != transform).then_some(next)
}

/// Horizontal-only counterpart of [`handle_zoom_input`].
pub fn handle_axis_zoom_input(
    ctx: &egui::Context,
    canvas_rect: egui::Rect,
    response: &egui::Response,
    zoom: AxisZoom,
) -> Option<AxisZoom> {
    if response.double_clicked() {
        return (zoom != AxisZoom::IDENTITY).then_some(AxisZoom::IDENTITY);
    }

    let mut next = zoom;

    if response.dragged() {
        next = next.translated(response.drag_delta().x as f64);
    }

    if let Some(pos) = response.hover_pos() {
        let scroll = scroll_y(ctx);
        if scroll != 0.0 {
            let factor = (scroll as f64 * WHEEL_ZOOM_SPEED).exp();
            next = next.scaled_around(factor, (pos.x - canvas_rect.min.x) as f64);
        }
    }

    (next != zoom).then_some(next)
}
