//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, text, status) and the magnifier
//! overlay drawn above them.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{header, status_bar, text_panel};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the built-in sample
    OpenSampleRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the document UI, called from
    /// the eframe::App::update() implementation. The overlay is rendered
    /// separately, after host events for this frame have been dispatched.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenSampleRequested => {
                        PanelInteraction::OpenSampleRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let text_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(12))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(text_frame)
            .show(ctx, |ui| {
                text_panel::render_text_panel(ui, ctx, state, loader);
            });

        interaction
    }
}
