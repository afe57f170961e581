//! Document text rendering
//!
//! Draws block elements as wrapped rows of word labels and records the
//! screen rectangle of every drawn node into the frame layout, so the
//! same frame can answer hit tests and measurement queries.

use crate::state::FrameLayout;
use eframe::egui;
use egui::{Rect, RichText, Sense};
use rloupe::{Document, NodeId, NodeKind};

/// Body text size in points
pub const BODY_FONT_SIZE: f32 = 18.0;

/// Inline styling inherited from enclosing elements.
#[derive(Debug, Clone, Copy, Default)]
struct InlineStyle {
    italics: bool,
    strong: bool,
}

impl InlineStyle {
    fn within(self, tag: &str) -> Self {
        match tag {
            "em" | "i" => Self { italics: true, ..self },
            "strong" | "b" => Self { strong: true, ..self },
            _ => self,
        }
    }

    fn apply(self, text: &str) -> RichText {
        let mut rich = RichText::new(text).size(BODY_FONT_SIZE);
        if self.italics {
            rich = rich.italics();
        }
        if self.strong {
            rich = rich.strong();
        }
        rich
    }
}

/// Renders one block element as a wrapped paragraph.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `doc` - The segmented document
/// * `block` - Block element to render (a child of the root)
/// * `layout` - Receives the geometry of every drawn node
pub fn render_block(ui: &mut egui::Ui, doc: &Document, block: NodeId, layout: &mut FrameLayout) {
    let response = ui
        .horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            render_children(ui, doc, block, InlineStyle::default(), layout);
        })
        .response;
    layout.record(block, response.rect, doc.depth(block), true);
}

/// Renders the children of `parent` inline and returns their combined extent.
fn render_children(
    ui: &mut egui::Ui,
    doc: &Document,
    parent: NodeId,
    style: InlineStyle,
    layout: &mut FrameLayout,
) -> Option<Rect> {
    let mut extent: Option<Rect> = None;

    for &child in doc.children(parent) {
        let depth = doc.depth(child);
        let rect = match doc.kind(child) {
            Some(NodeKind::Word(word)) => {
                let rect = add_label(ui, style.apply(word));
                layout.record(child, rect, depth, true);
                Some(rect)
            }
            Some(NodeKind::Text(text)) => {
                // Runs of whitespace collapse to a single space
                let shown = if text.trim().is_empty() { " " } else { text.as_str() };
                let rect = add_label(ui, style.apply(shown));
                layout.record(child, rect, depth, false);
                Some(rect)
            }
            Some(NodeKind::Element { tag }) => {
                let rect = render_children(ui, doc, child, style.within(tag), layout);
                if let Some(rect) = rect {
                    layout.record(child, rect, depth, true);
                }
                rect
            }
            None => None,
        };

        extent = match (extent, rect) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        };
    }

    extent
}

fn add_label(ui: &mut egui::Ui, text: RichText) -> Rect {
    ui.add(
        egui::Label::new(text)
            .extend()
            .selectable(false)
            .sense(Sense::hover()),
    )
    .rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_nesting() {
        let style = InlineStyle::default().within("em").within("strong");
        assert!(style.italics);
        assert!(style.strong);

        let plain = InlineStyle::default().within("span");
        assert!(!plain.italics);
        assert!(!plain.strong);
    }
}
