//! Responsive layout coordination.
//!
//! Translates viewport resizes into the mobile flag of the view state.

use crate::app::UiConfig;
use crate::store::UiStore;

/// Coordinates the mobile flag with the current viewport width.
pub struct ResponsiveCoordinator;

impl ResponsiveCoordinator {
    /// Returns whether `width` falls in the mobile layout range.
    pub fn is_mobile_width(width: f32, config: &UiConfig) -> bool {
        width < config.mobile_breakpoint
    }

    /// Updates the mobile flag for a new viewport width.
    ///
    /// `set_is_mobile` also forces the sidebar, so it is only called when the
    /// breakpoint is crossed. Resize events inside one range keep whatever
    /// sidebar state the user chose.
    ///
    /// Returns true if the flag changed.
    pub fn sync_viewport_width(store: &UiStore, width: f32, config: &UiConfig) -> bool {
        let mobile = Self::is_mobile_width(width, config);
        if store.with_state(|s| s.is_mobile()) == mobile {
            return false;
        }
        log::debug!("Viewport width {} crossed breakpoint {}: mobile = {}", width, config.mobile_breakpoint, mobile);
        store.set_is_mobile(mobile);
        true
    }
}
