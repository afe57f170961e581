//! Status bar UI rendering
//!
//! Shows the loaded document and what the magnifier is doing.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;
use rloupe::OverlayPhase;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let document = match state.document.document() {
            Some(document) => document,
            None => {
                ui.label(RichText::new("No text loaded").strong());
                return;
            }
        };

        let source = state
            .document
            .file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Sample".to_string());
        ui.label(RichText::new(format!("{} | Words: {}", source, state.document.word_count())).strong());

        ui.label(RichText::new("|").strong());
        let hovered = state
            .magnifier
            .tracking()
            .current()
            .map(|unit| document.text_content(unit))
            .unwrap_or_else(|| "-".to_string());
        ui.label(RichText::new(format!("Hovered: {}", hovered)).strong());

        ui.label(RichText::new("|").strong());
        let overlay = state.magnifier.overlay();
        ui.label(RichText::new(format!(
            "Overlay: {} | Hides: {}",
            phase_label(overlay.phase()),
            overlay.hide_count()
        )).strong());
    });
}

fn phase_label(phase: OverlayPhase) -> &'static str {
    match phase {
        OverlayPhase::Hidden => "hidden",
        OverlayPhase::PendingHide => "hiding",
        OverlayPhase::Visible => "visible",
    }
}
