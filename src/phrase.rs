//! Phrase assembly around a hovered word unit.
//!
//! Starting from the hovered unit, the resolver walks the sibling chain in
//! each direction. Separators are transparent and never count against the
//! budget; any other non-word sibling (punctuation text, inline elements)
//! ends the walk in that direction.

use crate::document::{Document, NodeId, UnitClass};

/// Ordered window of word units shown magnified together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseWindow {
    units: Vec<NodeId>,
    hovered_index: usize,
}

impl PhraseWindow {
    /// Returns the units in document order.
    pub fn units(&self) -> &[NodeId] {
        &self.units
    }

    /// Returns the hovered unit.
    pub fn hovered(&self) -> NodeId {
        self.units[self.hovered_index]
    }

    /// Number of units collected before the hovered one.
    pub fn before_count(&self) -> usize {
        self.hovered_index
    }

    /// Number of units collected after the hovered one.
    pub fn after_count(&self) -> usize {
        self.units.len() - self.hovered_index - 1
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false for resolved windows; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn first(&self) -> NodeId {
        self.units[0]
    }

    pub fn last(&self) -> NodeId {
        self.units[self.units.len() - 1]
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.units.contains(&node)
    }
}

/// Assembles the window of up to `words_before + 1 + words_after` units
/// around `hovered`.
///
/// # Arguments
/// * `doc` - Document holding the sibling chain
/// * `hovered` - The word unit under the pointer
/// * `words_before` - Maximum number of units to collect before `hovered`
/// * `words_after` - Maximum number of units to collect after `hovered`
pub fn resolve(doc: &Document, hovered: NodeId, words_before: usize, words_after: usize) -> PhraseWindow {
    let mut before = walk(doc, hovered, words_before, Document::prev_sibling);
    let after = walk(doc, hovered, words_after, Document::next_sibling);

    before.reverse();
    let hovered_index = before.len();
    let mut units = before;
    units.push(hovered);
    units.extend(after);

    log::trace!(
        "resolved window around node {}: {} before, {} after",
        hovered,
        hovered_index,
        units.len() - hovered_index - 1
    );

    PhraseWindow { units, hovered_index }
}

fn walk(
    doc: &Document,
    start: NodeId,
    budget: usize,
    step: fn(&Document, NodeId) -> Option<NodeId>,
) -> Vec<NodeId> {
    let mut collected = Vec::with_capacity(budget);
    let mut cursor = step(doc, start);

    while collected.len() < budget {
        let node = match cursor {
            Some(node) => node,
            None => break,
        };
        match doc.classify(node) {
            UnitClass::Separator => {}
            UnitClass::Word => collected.push(node),
            UnitClass::Other => break,
        }
        cursor = step(doc, node);
    }

    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::segment_document;

    fn paragraph(text: &str) -> (Document, Vec<NodeId>) {
        let mut doc = Document::new();
        let root = doc.root();
        let p = doc.append_element(root, "p").unwrap();
        doc.append_text(p, text).unwrap();
        segment_document(&mut doc, root).unwrap();
        let words = doc.words();
        (doc, words)
    }

    fn texts(doc: &Document, window: &PhraseWindow) -> Vec<String> {
        window.units().iter().map(|&id| doc.text_content(id)).collect()
    }

    #[test]
    fn test_middle_word_gets_full_window() {
        let (doc, words) = paragraph("The quick brown fox jumps over");
        let window = resolve(&doc, words[3], 2, 2);
        assert_eq!(texts(&doc, &window), vec!["quick", "brown", "fox", "jumps", "over"]);
        assert_eq!(window.hovered(), words[3]);
        assert_eq!(window.before_count(), 2);
        assert_eq!(window.after_count(), 2);
    }

    #[test]
    fn test_first_and_last_words_truncate() {
        let (doc, words) = paragraph("The quick brown fox jumps over");
        let first = resolve(&doc, words[0], 2, 2);
        assert_eq!(texts(&doc, &first), vec!["The", "quick", "brown"]);
        assert_eq!(first.before_count(), 0);

        let last = resolve(&doc, words[5], 2, 2);
        assert_eq!(texts(&doc, &last), vec!["fox", "jumps", "over"]);
        assert_eq!(last.after_count(), 0);
    }

    #[test]
    fn test_zero_budget_yields_hovered_only() {
        let (doc, words) = paragraph("a b c");
        let window = resolve(&doc, words[1], 0, 0);
        assert_eq!(window.units(), &[words[1]]);
        assert!(!window.is_empty());
    }

    #[test]
    fn test_extra_whitespace_is_transparent() {
        let (tight_doc, tight) = paragraph("one two three four five");
        let (loose_doc, loose) = paragraph("one \n\t two    three  four \n five");
        let a = texts(&tight_doc, &resolve(&tight_doc, tight[2], 2, 2));
        let b = texts(&loose_doc, &resolve(&loose_doc, loose[2], 2, 2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_word_sibling_is_a_hard_boundary() {
        let mut doc = Document::new();
        let p = doc.append_element(doc.root(), "p").unwrap();
        let a = doc.append_word(p, "alpha").unwrap();
        doc.append_text(p, " ").unwrap();
        let em = doc.append_element(p, "em").unwrap();
        doc.append_word(em, "bold").unwrap();
        doc.append_text(p, " ").unwrap();
        let b = doc.append_word(p, "beta").unwrap();
        doc.append_text(p, " - ").unwrap();
        let c = doc.append_word(p, "gamma").unwrap();

        let window = resolve(&doc, b, 2, 2);
        assert_eq!(window.units(), &[b]);

        let window = resolve(&doc, a, 2, 2);
        assert_eq!(window.units(), &[a]);

        let window = resolve(&doc, c, 2, 2);
        assert_eq!(window.units(), &[c]);
    }

    #[test]
    fn test_window_bounds_hold_for_every_word() {
        let (doc, words) = paragraph("w0 w1 w2 w3 w4 w5 w6 w7");
        for &word in &words {
            let window = resolve(&doc, word, 2, 3);
            assert!(window.len() >= 1 && window.len() <= 6);
            assert!(window.contains(word));
        }
    }
}
