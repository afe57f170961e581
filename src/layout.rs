//! Host layout interface and a deterministic headless implementation.
//!
//! The magnifier never measures anything itself. Whatever renders the
//! document implements `LayoutHost` and reports rendered boxes relative to
//! the visible viewport, plus the current scroll offset.

use crate::document::{Document, NodeId, NodeKind};
use egui::{pos2, vec2, Rect, Vec2};
use std::collections::HashMap;

/// Measurement services the host environment provides.
pub trait LayoutHost {
    /// Returns the rendered box of a node relative to the viewport origin.
    ///
    /// `None` means the node is not rendered (or not measured yet).
    fn node_rect(&self, node: NodeId) -> Option<Rect>;

    /// Returns the current scroll offset of the viewport in page units.
    fn scroll_offset(&self) -> Vec2;

    /// Returns the size of the visible viewport.
    fn viewport_size(&self) -> Vec2;

    /// Returns the box enclosing every measurable node in the inclusive
    /// sibling range `first..=last`.
    fn range_rect(&self, doc: &Document, first: NodeId, last: NodeId) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        let mut cursor = Some(first);
        while let Some(node) = cursor {
            if let Some(r) = self.node_rect(node) {
                rect = Some(rect.map_or(r, |acc| acc.union(r)));
            }
            if node == last {
                break;
            }
            cursor = doc.next_sibling(node);
        }
        rect
    }
}

/// Fixed-advance layout used for headless runs and tests.
///
/// Every child of the root starts on a fresh line, with one blank line
/// between blocks. Words wrap as a whole once they would cross `columns`.
#[derive(Debug, Clone)]
pub struct MonospaceLayout {
    rects: HashMap<NodeId, Rect>,
    glyph_advance: f32,
    line_height: f32,
    scroll_offset: Vec2,
    viewport_size: Vec2,
}

impl MonospaceLayout {
    pub const DEFAULT_ADVANCE: f32 = 8.0;
    pub const DEFAULT_LINE_HEIGHT: f32 = 16.0;

    /// Lays out a document with the default glyph metrics.
    pub fn new(doc: &Document, columns: usize) -> Self {
        Self::with_metrics(doc, columns, Self::DEFAULT_ADVANCE, Self::DEFAULT_LINE_HEIGHT)
    }

    /// Lays out a document with explicit glyph advance and line height.
    pub fn with_metrics(doc: &Document, columns: usize, glyph_advance: f32, line_height: f32) -> Self {
        let columns = columns.max(1);
        let mut cursor = Cursor { column: 0, line: 0, columns };
        let mut rects = HashMap::new();

        let mut layout = Self {
            rects: HashMap::new(),
            glyph_advance,
            line_height,
            scroll_offset: Vec2::ZERO,
            viewport_size: vec2(columns as f32 * glyph_advance, 0.0),
        };

        for (block_index, &block) in doc.children(doc.root()).iter().enumerate() {
            if block_index > 0 {
                cursor.line += 2;
                cursor.column = 0;
            }
            layout.place(doc, block, &mut cursor, &mut rects);
        }

        let lines = if rects.is_empty() { 0 } else { cursor.line + 1 };
        layout.viewport_size.y = lines as f32 * line_height;
        layout.rects = rects;
        layout
    }

    fn place(&self, doc: &Document, node: NodeId, cursor: &mut Cursor, rects: &mut HashMap<NodeId, Rect>) {
        match doc.kind(node) {
            Some(NodeKind::Word(word)) => {
                let len = word.chars().count();
                if cursor.column > 0 && cursor.column + len > cursor.columns {
                    cursor.wrap();
                }
                rects.insert(node, self.span_rect(cursor.column, cursor.line, len));
                cursor.column += len;
            }
            Some(NodeKind::Text(text)) => {
                let mut rect: Option<Rect> = None;
                for _ in text.chars() {
                    if cursor.column >= cursor.columns {
                        cursor.wrap();
                    }
                    let glyph = self.span_rect(cursor.column, cursor.line, 1);
                    rect = Some(rect.map_or(glyph, |r| r.union(glyph)));
                    cursor.column += 1;
                }
                if let Some(rect) = rect {
                    rects.insert(node, rect);
                }
            }
            Some(NodeKind::Element { .. }) => {
                let mut rect: Option<Rect> = None;
                for &child in doc.children(node) {
                    self.place(doc, child, cursor, rects);
                    if let Some(&child_rect) = rects.get(&child) {
                        rect = Some(rect.map_or(child_rect, |r| r.union(child_rect)));
                    }
                }
                if let Some(rect) = rect {
                    rects.insert(node, rect);
                }
            }
            None => {}
        }
    }

    fn span_rect(&self, column: usize, line: usize, len: usize) -> Rect {
        let min = pos2(column as f32 * self.glyph_advance, line as f32 * self.line_height);
        Rect::from_min_size(min, vec2(len as f32 * self.glyph_advance, self.line_height))
    }

    /// Returns the page-space box of a node, ignoring scroll.
    pub fn page_rect(&self, node: NodeId) -> Option<Rect> {
        self.rects.get(&node).copied()
    }

    /// Sets the scroll offset; subsequent `node_rect` calls shift accordingly.
    pub fn set_scroll_offset(&mut self, offset: Vec2) {
        self.scroll_offset = vec2(offset.x.max(0.0), offset.y.max(0.0));
    }

    /// Overrides the viewport size reported to the magnifier.
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport_size = size;
    }

    pub fn glyph_advance(&self) -> f32 {
        self.glyph_advance
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }
}

impl LayoutHost for MonospaceLayout {
    fn node_rect(&self, node: NodeId) -> Option<Rect> {
        self.page_rect(node).map(|r| r.translate(-self.scroll_offset))
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }
}

struct Cursor {
    column: usize,
    line: usize,
    columns: usize,
}

impl Cursor {
    fn wrap(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::segment_document;

    fn doc_with(text: &str) -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let p = doc.append_element(root, "p").unwrap();
        doc.append_text(p, text).unwrap();
        segment_document(&mut doc, root).unwrap();
        (doc, p)
    }

    #[test]
    fn test_words_advance_on_one_line() {
        let (doc, _) = doc_with("ab cd");
        let layout = MonospaceLayout::new(&doc, 80);
        let words = doc.words();
        assert_eq!(layout.node_rect(words[0]), Some(Rect::from_min_max(pos2(0.0, 0.0), pos2(16.0, 16.0))));
        assert_eq!(layout.node_rect(words[1]), Some(Rect::from_min_max(pos2(24.0, 0.0), pos2(40.0, 16.0))));
    }

    #[test]
    fn test_words_wrap_whole() {
        let (doc, _) = doc_with("abc defg");
        let layout = MonospaceLayout::new(&doc, 6);
        let words = doc.words();
        let second = layout.node_rect(words[1]).unwrap();
        assert_eq!(second.min, pos2(0.0, 16.0));
    }

    #[test]
    fn test_scroll_offset_shifts_viewport_rects() {
        let (doc, p) = doc_with("ab cd");
        let mut layout = MonospaceLayout::new(&doc, 80);
        layout.set_scroll_offset(vec2(0.0, 10.0));
        let rect = layout.node_rect(doc.words()[0]).unwrap();
        assert_eq!(rect.min, pos2(0.0, -10.0));
        assert_eq!(layout.page_rect(p).unwrap().min, pos2(0.0, 0.0));
    }

    #[test]
    fn test_range_rect_spans_siblings() {
        let (doc, _) = doc_with("ab cd ef");
        let layout = MonospaceLayout::new(&doc, 80);
        let words = doc.words();
        let rect = layout.range_rect(&doc, words[0], words[2]).unwrap();
        assert_eq!(rect, Rect::from_min_max(pos2(0.0, 0.0), pos2(64.0, 16.0)));
    }

    #[test]
    fn test_blocks_start_on_new_lines() {
        let mut doc = Document::new();
        let root = doc.root();
        let p1 = doc.append_element(root, "p").unwrap();
        doc.append_text(p1, "one").unwrap();
        let p2 = doc.append_element(root, "p").unwrap();
        doc.append_text(p2, "two").unwrap();
        segment_document(&mut doc, root).unwrap();

        let layout = MonospaceLayout::new(&doc, 80);
        assert_eq!(layout.page_rect(p2).unwrap().min, pos2(0.0, 32.0));
        assert_eq!(layout.viewport_size().y, 48.0);
    }
}
