//! Header panel UI rendering
//!
//! Handles the top bar with the file controls.

use crate::app::AppState;
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a file through "Open Text"
    OpenFileRequested(PathBuf),
    /// User clicked "Sample"
    OpenSampleRequested,
}

/// Renders the application header with file controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Text").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Text Files", &["txt", "md", "text"])
                .add_filter("All Files", &["*"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("📄 Sample").clicked() {
            interaction = Some(HeaderInteraction::OpenSampleRequested);
        }

        ui.separator();

        let config = state.magnifier.config();
        ui.label(format!(
            "Context: {} before / {} after | Hide delay: {} ms",
            config.words_before, config.words_after, config.hide_delay_ms
        ));
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
