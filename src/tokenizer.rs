//! Whitespace tokenizer that turns raw text into word and separator units.
//!
//! Splitting is whitespace-only: punctuation stays glued to the word it
//! touches, so "fox," is a single unit.

use crate::document::{Document, NodeId, NodeKind};
use anyhow::Result;

/// Elements whose text is never segmented.
const SKIPPED_TAGS: &[&str] = &["script", "style", "textarea", "overlay"];

/// A single piece of segmented text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Run of non-whitespace characters
    Word(String),
    /// Run of whitespace characters
    Separator(String),
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Word(s) | Fragment::Separator(s) => s,
        }
    }

    fn into_node_kind(self) -> NodeKind {
        match self {
            Fragment::Word(s) => NodeKind::Word(s),
            Fragment::Separator(s) => NodeKind::Text(s),
        }
    }
}

/// Counts reported by a segmentation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    pub words: usize,
    pub separators: usize,
    pub text_nodes_replaced: usize,
}

/// Splits text into alternating word and separator fragments.
///
/// Concatenating the fragments reproduces the input exactly.
pub fn segment(text: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut in_whitespace = false;

    for ch in text.chars() {
        let is_ws = ch.is_whitespace();
        if !current.is_empty() && is_ws != in_whitespace {
            fragments.push(make_fragment(std::mem::take(&mut current), in_whitespace));
        }
        in_whitespace = is_ws;
        current.push(ch);
    }
    if !current.is_empty() {
        fragments.push(make_fragment(current, in_whitespace));
    }

    fragments
}

fn make_fragment(text: String, whitespace: bool) -> Fragment {
    if whitespace {
        Fragment::Separator(text)
    } else {
        Fragment::Word(text)
    }
}

/// Segments every eligible text node under `root` into word units.
///
/// Whitespace-only text nodes are already separators and stay as they are;
/// existing word units are left alone, so running the pass twice is a no-op.
pub fn segment_document(doc: &mut Document, root: NodeId) -> Result<SegmentStats> {
    let mut stats = SegmentStats::default();
    let mut targets = Vec::new();
    collect_targets(doc, root, &mut targets);

    for target in targets {
        let text = match doc.kind(target) {
            Some(NodeKind::Text(text)) => text.clone(),
            _ => continue,
        };
        let fragments = segment(&text);
        for fragment in &fragments {
            match fragment {
                Fragment::Word(_) => stats.words += 1,
                Fragment::Separator(_) => stats.separators += 1,
            }
        }
        doc.replace_with(target, fragments.into_iter().map(Fragment::into_node_kind).collect())?;
        stats.text_nodes_replaced += 1;
    }

    log::debug!(
        "segmented {} text nodes into {} words and {} separators",
        stats.text_nodes_replaced,
        stats.words,
        stats.separators
    );
    Ok(stats)
}

fn collect_targets(doc: &Document, id: NodeId, out: &mut Vec<NodeId>) {
    match doc.kind(id) {
        Some(NodeKind::Element { tag }) => {
            if SKIPPED_TAGS.contains(&tag.as_str()) {
                return;
            }
            for &child in doc.children(id) {
                collect_targets(doc, child, out);
            }
        }
        Some(NodeKind::Text(text)) if !text.chars().all(char::is_whitespace) => out.push(id),
        _ => {}
    }
}
