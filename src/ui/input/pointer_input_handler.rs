//! Pointer, scroll and resize observation.
//!
//! egui is immediate mode and only reports where the pointer is. This
//! handler compares the current frame with the previous one and produces
//! the discrete events the magnifier subscribes to, in the order a page
//! would deliver them: resize, scroll, then leave/enter.

use crate::app::AppState;
use eframe::egui;
use rloupe::{HostEvent, LayoutHost, PointerTarget};

/// Collects this frame's host events.
///
/// Must run after the text panel has recorded the frame layout.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `state` - Mutable reference to application state
///
/// # Returns
/// Events to dispatch, in delivery order
pub fn handle_pointer_input(ctx: &egui::Context, state: &mut AppState) -> Vec<HostEvent> {
    let mut events = Vec::new();

    if state.document.document().is_none() {
        state.pointer.reset();
        return events;
    }

    if state.viewport.observe_size(ctx.content_rect().size()) {
        events.push(HostEvent::Resize);
    }
    if state.viewport.observe_scroll(state.layout.scroll_offset()) {
        events.push(HostEvent::Scroll);
    }

    let hovered = ctx
        .input(|i| i.pointer.hover_pos())
        .and_then(|pos| state.layout.hit_test(pos))
        .map(PointerTarget::Node);
    events.extend(state.pointer.transition(hovered));

    events
}
