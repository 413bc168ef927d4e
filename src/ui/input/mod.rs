//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Pan/zoom input for the map, ternary and chart panels

pub mod zoom_input_handler;
