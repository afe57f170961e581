//! Viewport change tracking.
//!
//! This module remembers the scroll offset and window size seen on the
//! previous frame so the input handler can turn changes into scroll and
//! resize events for the magnifier.

use egui::Vec2;

/// State related to the visible viewport.
///
/// Responsibilities:
/// - Remembering last frame's scroll offset
/// - Remembering last frame's viewport size
/// - Reporting when either changed
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Scroll offset observed on the previous frame
    last_scroll_offset: Option<Vec2>,
    /// Viewport size observed on the previous frame
    last_viewport_size: Option<Vec2>,
}

impl ViewportState {
    /// Creates a new viewport state with nothing observed yet.
    pub fn new() -> Self {
        Self {
            last_scroll_offset: None,
            last_viewport_size: None,
        }
    }

    /// Forgets previous observations (e.g. after loading a new document).
    pub fn reset(&mut self) {
        self.last_scroll_offset = None;
        self.last_viewport_size = None;
    }

    /// Returns the scroll offset seen on the last frame.
    pub fn scroll_offset(&self) -> Vec2 {
        self.last_scroll_offset.unwrap_or(Vec2::ZERO)
    }

    // ===== Change Detection =====

    /// Records this frame's scroll offset.
    ///
    /// Returns true if it differs from the previous frame's. The first
    /// observation never counts as a change.
    pub fn observe_scroll(&mut self, offset: Vec2) -> bool {
        Self::observe(&mut self.last_scroll_offset, offset)
    }

    /// Records this frame's viewport size.
    ///
    /// Returns true if it differs from the previous frame's.
    pub fn observe_size(&mut self, size: Vec2) -> bool {
        Self::observe(&mut self.last_viewport_size, size)
    }

    fn observe(slot: &mut Option<Vec2>, value: Vec2) -> bool {
        let changed = matches!(*slot, Some(previous) if previous != value);
        *slot = Some(value);
        changed
    }
}
