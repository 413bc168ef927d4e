//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the election map viewer:
//! - Header panel (sidebar toggle, map type, color mode, dot scale)
//! - Sidebar (zoom readouts and resets, hovered year)
//! - Map panel (choropleth, hexagon and dot-density rendering)
//! - Ternary panel (three-way split plot)
//! - Chart panel (national share by year)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pan and zoom)

pub mod header;
pub mod sidebar;
pub mod map_panel;
pub mod ternary_panel;
pub mod chart_panel;
pub mod panel_manager;
pub mod input;
