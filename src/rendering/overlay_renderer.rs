//! Magnifier overlay rendering.
//!
//! The overlay floats above all panels in a foreground area. It never takes
//! pointer input, so hit testing passes through it to the words beneath.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;

/// Renders the magnified phrase if the overlay is visible.
///
/// After painting, the rendered size is reported back to the magnifier so
/// the overlay can be centered over its target. A repaint is requested when
/// that moves it.
///
/// # Arguments
/// * `ctx` - The egui context
/// * `state` - Mutable reference to application state
pub fn render_overlay(ctx: &egui::Context, state: &mut AppState) {
    let overlay = state.magnifier.overlay().state();
    if !overlay.visible() {
        return;
    }

    let text = overlay.text().to_string();
    let screen_pos = state.layout.page_to_screen(overlay.position());
    let font_size = state.magnifier.config().font_size;

    let response = egui::Area::new(egui::Id::new("magnifier_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen_pos)
        // Never a pointer target, so leaves never report `PointerTarget::Overlay`
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(font_size).strong())
                        .extend()
                        .selectable(false),
                );
            });
        })
        .response;

    if state.magnifier.overlay_rendered(response.rect.size()) {
        ctx.request_repaint();
    }
}
