//! Loupe Text Viewer GUI Application
//!
//! This module provides an interactive text viewer with a hover magnifier
//! using the egui framework. The viewer features:
//! - A scrollable view of a segmented plain-text document
//! - A floating overlay that magnifies the hovered word with its neighbours

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Asynchronous file loading with a loading indicator
//! - Persistent magnifier settings
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Background document loading
//! - `ui/` - UI panel rendering and input handling
//! - `rendering/` - Low-level rendering for text and the overlay
//! - `state/` - State management for the document, viewport, layout and pointer

use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the viewer GUI.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments to check for initial file to load
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Loupe Text Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Loupe Text Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(LoupeViewerApp::new(cc, initial_file)))),
    )
}

/// The main viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles loading and feeds host events to the magnifier
/// - `SettingsCoordinator` handles settings persistence
/// - `PanelManager` handles UI panel layout and rendering
struct LoupeViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous file loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl LoupeViewerApp {
    /// Creates a new viewer instance with magnifier settings loaded from persistent storage.
    /// Optionally accepts an initial file path to load on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let config = SettingsCoordinator::load_config(cc.storage);
        let mut state = AppState::new(config);
        if initial_file.is_none() {
            ApplicationCoordinator::open_sample(&mut state);
        }

        Self {
            state,
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenSampleRequested => {
                ApplicationCoordinator::open_sample(&mut self.state);
            }
        }
    }
}

impl eframe::App for LoupeViewerApp {
    /// Called when the app is being shut down - ensures settings are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_config(storage, self.state.magnifier.config());
    }

    /// Main update loop.
    ///
    /// 1. Check for async loading completion
    /// 2. Load initial file if specified via command line
    /// 3. Render all panels, recording this frame's layout
    /// 4. Turn pointer, scroll and resize changes into host events and dispatch them
    /// 5. Fire any due hide and schedule the next wakeup
    /// 6. Render the overlay on top
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }

        let now = Instant::now();
        let events = ui::input::pointer_input_handler::handle_pointer_input(ctx, &mut self.state);
        ApplicationCoordinator::dispatch_events(&mut self.state, &events, now);
        ApplicationCoordinator::poll_magnifier(&mut self.state, ctx, now);

        rendering::overlay_renderer::render_overlay(ctx, &mut self.state);
    }
}
