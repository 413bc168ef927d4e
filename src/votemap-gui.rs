//! Election Map Viewer GUI Application
//!
//! Demo shell for the shared view-state store, built with the egui framework.
//! Every panel reads one snapshot of the store per frame and writes back only
//! through store mutators:
//! - Map panel with choropleth, hexagon and dot-density modes
//! - Ternary plot of three-way splits
//! - Year chart with horizontal zoom and hover tracking
//! - Sidebar that follows the responsive mobile flag
//!
//! The application is built with a modular architecture:
//! - `io/` - Deterministic sample election data
//! - `presentation/` - Color mapping for map color modes
//! - `ui/` - Panel rendering and pan/zoom input handling

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;
use std::rc::Rc;

mod io;
mod presentation;
mod ui;

use io::SampleElection;
use ui::panel_manager::PanelManager;
use votemap::{ResponsiveCoordinator, SettingsCoordinator, Subscription, UiConfig, UiStore};

/// Main application entry point that initializes and launches the viewer GUI.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional configuration file as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = SettingsCoordinator::load_or_default(config_path.as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Election Map Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Election Map Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(VoteMapApp::new(cc, config)))),
    )
}

/// The main viewer application.
///
/// Owns the store and hands it to the panels by reference each frame.
struct VoteMapApp {
    /// Shared view state
    store: Rc<UiStore>,
    /// Startup configuration
    config: UiConfig,
    /// Sample data drawn by the panels
    election: SampleElection,
    /// Keeps the repaint-on-change subscription alive
    _repaint: Subscription,
}

impl VoteMapApp {
    fn new(cc: &eframe::CreationContext, config: UiConfig) -> Self {
        let store = UiStore::new();

        // Changes made outside the frame loop (e.g. by other subscribers) still repaint
        let ctx = cc.egui_ctx.clone();
        let repaint = store.subscribe_all(move |_, changed| {
            log::trace!("Repaint requested for {} changed field(s)", changed.len());
            ctx.request_repaint();
        });

        log::info!("Viewer started (mobile breakpoint {} px)", config.mobile_breakpoint);

        Self {
            store,
            config,
            election: SampleElection::generate(),
            _repaint: repaint,
        }
    }
}

impl eframe::App for VoteMapApp {
    /// Main update loop.
    ///
    /// 1. Sync the mobile flag with the window width
    /// 2. Render all panels via PanelManager
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ResponsiveCoordinator::sync_viewport_width(&self.store, ctx.content_rect().width(), &self.config);

        PanelManager::render_all_panels(ctx, &self.store, &self.config, &self.election);
    }
}
