//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from view state:
//! - Color mapping for map regions under each color mode

pub mod color_mapping;
