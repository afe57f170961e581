//! Per-frame layout measurements of the rendered document.
//!
//! The text renderer records the screen rectangle of every node it draws.
//! Those rectangles answer the magnifier's measurement queries and drive
//! pointer hit testing for the same frame.

use egui::{Pos2, Rect, Vec2};
use rloupe::{LayoutHost, NodeId};
use std::collections::HashMap;

/// A hoverable region recorded during rendering.
#[derive(Debug, Clone, Copy)]
struct HitRegion {
    node: NodeId,
    rect: Rect,
    depth: usize,
}

/// Rendered node geometry for the current frame.
#[derive(Debug, Clone, Default)]
pub struct FrameLayout {
    /// Screen-space rectangles keyed by node
    rects: HashMap<NodeId, Rect>,
    /// Pointer-targetable regions (elements and words, never bare text)
    hits: Vec<HitRegion>,
    /// Screen position of the viewport's top-left corner
    viewport_origin: Pos2,
    viewport_size: Vec2,
    scroll_offset: Vec2,
}

impl FrameLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops last frame's measurements.
    pub fn begin_frame(&mut self) {
        self.rects.clear();
        self.hits.clear();
    }

    /// Records the screen rectangle of a rendered node.
    ///
    /// # Arguments
    /// * `node` - The rendered node
    /// * `rect` - Its screen-space rectangle
    /// * `depth` - Tree depth, deeper regions win hit tests
    /// * `targetable` - Whether the pointer can land on this node
    pub fn record(&mut self, node: NodeId, rect: Rect, depth: usize, targetable: bool) {
        self.rects
            .entry(node)
            .and_modify(|r| *r = r.union(rect))
            .or_insert(rect);
        if targetable {
            self.hits.push(HitRegion { node, rect, depth });
        }
    }

    /// Returns the screen rectangle recorded for a node this frame.
    pub fn screen_rect(&self, node: NodeId) -> Option<Rect> {
        self.rects.get(&node).copied()
    }

    /// Sets the viewport geometry for this frame.
    pub fn set_viewport(&mut self, origin: Pos2, size: Vec2, scroll_offset: Vec2) {
        self.viewport_origin = origin;
        self.viewport_size = size;
        self.scroll_offset = scroll_offset;
    }

    /// Returns the screen-space viewport rectangle.
    pub fn viewport_rect(&self) -> Rect {
        Rect::from_min_size(self.viewport_origin, self.viewport_size)
    }

    /// Converts a page-space position back to screen space.
    pub fn page_to_screen(&self, page: Pos2) -> Pos2 {
        page - self.scroll_offset + self.viewport_origin.to_vec2()
    }

    /// Finds the deepest targetable node under `pos`.
    pub fn hit_test(&self, pos: Pos2) -> Option<NodeId> {
        if !self.viewport_rect().contains(pos) {
            return None;
        }
        self.hits
            .iter()
            .filter(|hit| hit.rect.contains(pos))
            .max_by_key(|hit| hit.depth)
            .map(|hit| hit.node)
    }
}

impl LayoutHost for FrameLayout {
    fn node_rect(&self, node: NodeId) -> Option<Rect> {
        self.screen_rect(node)
            .map(|r| r.translate(-self.viewport_origin.to_vec2()))
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn layout() -> FrameLayout {
        let mut layout = FrameLayout::new();
        layout.set_viewport(pos2(10.0, 100.0), vec2(400.0, 300.0), vec2(0.0, 50.0));
        layout.record(1, Rect::from_min_max(pos2(10.0, 100.0), pos2(410.0, 140.0)), 1, true);
        layout.record(2, Rect::from_min_max(pos2(20.0, 110.0), pos2(60.0, 130.0)), 2, true);
        layout.record(3, Rect::from_min_max(pos2(60.0, 110.0), pos2(66.0, 130.0)), 2, false);
        layout
    }

    #[test]
    fn test_hit_test_prefers_deepest() {
        let layout = layout();
        assert_eq!(layout.hit_test(pos2(30.0, 120.0)), Some(2));
        assert_eq!(layout.hit_test(pos2(62.0, 120.0)), Some(1));
        assert_eq!(layout.hit_test(pos2(5.0, 120.0)), None);
    }

    #[test]
    fn test_node_rect_is_viewport_relative() {
        let layout = layout();
        let rect = layout.node_rect(2).unwrap();
        assert_eq!(rect.min, pos2(10.0, 10.0));
        assert_eq!(layout.page_to_screen(pos2(10.0, 60.0)), pos2(20.0, 110.0));
    }

    #[test]
    fn test_begin_frame_clears() {
        let mut layout = layout();
        layout.begin_frame();
        assert_eq!(layout.screen_rect(1), None);
        assert_eq!(layout.hit_test(pos2(30.0, 120.0)), None);
    }
}
