//! Text and geometry extraction for a resolved phrase window.

use crate::document::Document;
use crate::layout::LayoutHost;
use crate::phrase::PhraseWindow;
use egui::Rect;

/// Literal text and bounding box of a phrase window.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseExtract {
    /// Rendered text from the first unit's start to the last unit's end,
    /// interior separators included
    pub text: String,
    /// Smallest box enclosing the span, relative to the viewport
    pub rect: Rect,
}

/// Extracts the span covered by `window`.
///
/// Returns `None` when there is nothing to show: an empty window or a span
/// the host cannot measure. Callers hide the overlay in that case.
///
/// Wrapped spans produce a single box that may overestimate coverage.
pub fn extract<L: LayoutHost + ?Sized>(doc: &Document, layout: &L, window: &PhraseWindow) -> Option<PhraseExtract> {
    if window.is_empty() {
        return None;
    }

    let (first, last) = (window.first(), window.last());
    let mut text = String::new();
    let mut cursor = Some(first);
    while let Some(node) = cursor {
        text.push_str(&doc.text_content(node));
        if node == last {
            break;
        }
        cursor = doc.next_sibling(node);
    }

    let rect = layout.range_rect(doc, first, last)?;
    Some(PhraseExtract { text, rect })
}
