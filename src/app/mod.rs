//! Application-level modules for the election map viewer.
//!
//! This module contains the composed view state and the coordinators that
//! feed it from configuration and window events.

mod ui_state;
mod settings_coordinator;
mod responsive_coordinator;

pub use ui_state::{UiState, UiField};
pub use settings_coordinator::{SettingsCoordinator, UiConfig, DEFAULT_MOBILE_BREAKPOINT};
pub use responsive_coordinator::ResponsiveCoordinator;
