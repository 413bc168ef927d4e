pub mod state;
pub mod app;
pub mod store;

// Export state components
pub use state::{
    MapState, MapType, LayoutState, ViewportState, SelectionState,
    ZoomTransform, AxisZoom, DEFAULT_COLOR_MODE, DEFAULT_VOTES_PER_DOT
};

// Export composed state and coordinators
pub use app::{UiState, UiField, UiConfig, SettingsCoordinator, ResponsiveCoordinator};

// Export observable store
pub use store::{UiStore, Subscription, UiSubscriber};
