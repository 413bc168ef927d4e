//! State management modules for the election map viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Map state (rendering mode, color mode, dot-density scale)
//! - Layout state (sidebar, mobile flag)
//! - Viewport state (zoom transforms of every zoomable panel)
//! - Selection state (chart hover)

mod map_state;
mod layout_state;
mod viewport;
mod selection;

pub use map_state::{MapState, MapType, DEFAULT_COLOR_MODE, DEFAULT_VOTES_PER_DOT};
pub use layout_state::LayoutState;
pub use viewport::{ViewportState, ZoomTransform, AxisZoom};
pub use selection::SelectionState;
