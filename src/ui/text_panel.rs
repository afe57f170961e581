//! Text panel UI rendering
//!
//! Handles the central scrollable view of the loaded document. Every frame
//! the panel rebuilds the frame layout the magnifier measures against.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::rendering::text_renderer;
use eframe::egui;
use egui::ScrollArea;

/// Vertical gap between blocks, in points
const BLOCK_SPACING: f32 = 12.0;

/// Renders the document and records its geometry.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `ctx` - The egui context, used to keep the loading indicator animated
/// * `state` - Mutable reference to application state
/// * `loader` - Async loader, checked for an in-flight load
pub fn render_text_panel(ui: &mut egui::Ui, ctx: &egui::Context, state: &mut AppState, loader: &AsyncLoader) {
    state.layout.begin_frame();

    if loader.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading text...");
        });
        ctx.request_repaint_after(std::time::Duration::from_secs_f32(0.1));
        return;
    }

    let document = match state.document.document() {
        Some(document) => document,
        None => {
            ui.label("No text loaded - open a text file or the sample");
            return;
        }
    };

    let layout = &mut state.layout;
    let output = ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for &block in document.children(document.root()) {
                text_renderer::render_block(ui, document, block, layout);
                ui.add_space(BLOCK_SPACING);
            }
        });

    state
        .layout
        .set_viewport(output.inner_rect.min, output.inner_rect.size(), output.state.offset);
}
