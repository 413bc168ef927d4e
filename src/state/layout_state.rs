//! UI layout state management.
//!
//! This module encapsulates the state related to page layout:
//! sidebar visibility and the responsive mobile flag.

use serde::{Deserialize, Serialize};

/// State related to UI layout.
///
/// Responsibilities:
/// - Managing sidebar visibility
/// - Tracking the responsive-layout flag
/// - Keeping the sidebar consistent with the mobile flag when it changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Whether the sidebar is visible
    sidebar_open: bool,
    /// Whether the narrow (mobile) layout is active
    is_mobile: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            sidebar_open: true,
            is_mobile: false,
        }
    }

    // ===== Layout Queries =====

    /// Returns whether the sidebar is visible.
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Returns whether the mobile layout is active.
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    // ===== Layout Mutations =====

    /// Flips sidebar visibility.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Sets the mobile flag and forces the sidebar to match it.
    ///
    /// Entering mobile closes the sidebar and leaving it opens the sidebar,
    /// overwriting whatever the user last chose.
    pub fn set_is_mobile(&mut self, is_mobile: bool) {
        self.is_mobile = is_mobile;
        self.sidebar_open = !is_mobile;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        let mut layout = LayoutState::new();
        let before = layout.sidebar_open();
        layout.toggle_sidebar();
        assert_ne!(layout.sidebar_open(), before);
        layout.toggle_sidebar();
        assert_eq!(layout.sidebar_open(), before);
    }

    #[test]
    fn test_mobile_overrides_manual_sidebar() {
        let mut layout = LayoutState::new();
        layout.set_is_mobile(true);
        assert!(!layout.sidebar_open());

        // User opens the sidebar on mobile, then the flag is set again
        layout.toggle_sidebar();
        assert!(layout.sidebar_open());
        layout.set_is_mobile(true);
        assert!(!layout.sidebar_open());

        layout.toggle_sidebar();
        layout.toggle_sidebar();
        layout.set_is_mobile(false);
        assert!(layout.sidebar_open());
        assert!(!layout.is_mobile());
    }
}
