//! Document model the magnifier operates on.
//!
//! A `Document` is an arena of nodes forming a tree rooted at a `body`
//! element. Nodes are never freed: a node replaced by the tokenizer is
//! detached from its parent but its id stays valid, so ids held by the
//! hover tracker can never dangle.

use anyhow::{anyhow, bail, Result};

/// Type alias for node IDs (indices into the document arena)
pub type NodeId = usize;

/// Payload of a single document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Structural or inline element (`body`, `p`, `em`, ...)
    Element { tag: String },
    /// Raw text not (yet) segmented into units
    Text(String),
    /// Addressable word produced by the tokenizer
    Word(String),
}

/// Capability class used by phrase assembly.
///
/// Classification is a tagged check on the node kind rather than an
/// attribute probe: `Word` nodes are hover targets, whitespace-only text
/// is transparent, and everything else is a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Word,
    Separator,
    Other,
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    /// Ordinal position among the parent's children
    index: usize,
    children: Vec<NodeId>,
}

/// Arena-backed document tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing only the `body` root.
    pub fn new() -> Self {
        let root = Node {
            kind: NodeKind::Element { tag: "body".to_string() },
            parent: None,
            index: 0,
            children: Vec::new(),
        };
        Self { nodes: vec![root], root: 0 }
    }

    /// Returns the root element id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Total number of nodes ever created, including detached ones.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ===== Construction =====

    /// Appends a new element with the given tag under `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId> {
        self.append(parent, NodeKind::Element { tag: tag.to_string() })
    }

    /// Appends a raw text node under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId> {
        self.append(parent, NodeKind::Text(text.to_string()))
    }

    /// Appends a word unit under `parent`.
    ///
    /// Words must be non-empty and contain no whitespace.
    pub fn append_word(&mut self, parent: NodeId, word: &str) -> Result<NodeId> {
        if word.is_empty() || word.chars().any(char::is_whitespace) {
            bail!("word unit must be non-empty and whitespace-free: {:?}", word);
        }
        self.append(parent, NodeKind::Word(word.to_string()))
    }

    fn append(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId> {
        let parent_node = self
            .nodes
            .get(parent)
            .ok_or_else(|| anyhow!("unknown parent node {}", parent))?;
        if !matches!(parent_node.kind, NodeKind::Element { .. }) {
            bail!("node {} is not an element and cannot have children", parent);
        }

        let id = self.nodes.len();
        let index = parent_node.children.len();
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            index,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    /// Replaces `target` in its parent's child list with freshly created nodes.
    ///
    /// The target is detached; sibling ordinals after it are renumbered.
    /// Returns the ids of the inserted nodes in order.
    pub fn replace_with(&mut self, target: NodeId, kinds: Vec<NodeKind>) -> Result<Vec<NodeId>> {
        let parent = self
            .parent(target)
            .ok_or_else(|| anyhow!("node {} has no parent to be replaced in", target))?;
        let position = self.nodes[target].index;

        let mut inserted = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let id = self.nodes.len();
            self.nodes.push(Node {
                kind,
                parent: Some(parent),
                index: 0,
                children: Vec::new(),
            });
            inserted.push(id);
        }

        let children = &mut self.nodes[parent].children;
        children.remove(position);
        for (offset, &id) in inserted.iter().enumerate() {
            children.insert(position + offset, id);
        }
        self.nodes[target].parent = None;
        self.renumber_children(parent);
        Ok(inserted)
    }

    fn renumber_children(&mut self, parent: NodeId) {
        let children = self.nodes[parent].children.clone();
        for (index, child) in children.into_iter().enumerate() {
            self.nodes[child].index = index;
        }
    }

    // ===== Node Queries =====

    /// Returns the kind of a node, if the id is valid.
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id).map(|n| &n.kind)
    }

    /// Returns the tag name for element nodes.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { tag } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Returns the parent of an attached node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Returns the ordinal position of an attached node among its siblings.
    pub fn ordinal(&self, id: NodeId) -> Option<usize> {
        let node = self.nodes.get(id)?;
        node.parent.map(|_| node.index)
    }

    /// Returns the children of a node in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.nodes[id].index;
        if index == 0 {
            return None;
        }
        self.nodes[parent].children.get(index - 1).copied()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        self.nodes[parent].children.get(self.nodes[id].index + 1).copied()
    }

    /// Returns true if `node` is `ancestor` or lies inside its subtree.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Nesting depth of an attached node (root = 0).
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent(id);
        while let Some(current) = cursor {
            depth += 1;
            cursor = self.parent(current);
        }
        depth
    }

    /// Classifies a node for phrase assembly.
    pub fn classify(&self, id: NodeId) -> UnitClass {
        match self.kind(id) {
            Some(NodeKind::Word(_)) => UnitClass::Word,
            Some(NodeKind::Text(text)) if text.chars().all(char::is_whitespace) => UnitClass::Separator,
            _ => UnitClass::Other,
        }
    }

    /// Returns the rendered text of a subtree.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            Some(NodeKind::Text(text)) | Some(NodeKind::Word(text)) => out.push_str(text),
            Some(NodeKind::Element { .. }) => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    /// Returns the attached subtree rooted at `id` in pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// Returns every attached word unit in document order.
    pub fn words(&self) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&id| self.classify(id) == UnitClass::Word)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, Vec<NodeId>) {
        let mut doc = Document::new();
        let p = doc.append_element(doc.root(), "p").unwrap();
        let a = doc.append_word(p, "alpha").unwrap();
        let sep = doc.append_text(p, " ").unwrap();
        let b = doc.append_word(p, "beta").unwrap();
        (doc, p, vec![a, sep, b])
    }

    #[test]
    fn test_sibling_navigation() {
        let (doc, p, ids) = sample();
        assert_eq!(doc.children(p), ids.as_slice());
        assert_eq!(doc.prev_sibling(ids[0]), None);
        assert_eq!(doc.next_sibling(ids[0]), Some(ids[1]));
        assert_eq!(doc.prev_sibling(ids[2]), Some(ids[1]));
        assert_eq!(doc.next_sibling(ids[2]), None);
        assert_eq!(doc.ordinal(ids[2]), Some(2));
    }

    #[test]
    fn test_classification() {
        let (mut doc, p, ids) = sample();
        let punct = doc.append_text(p, ",").unwrap();
        assert_eq!(doc.classify(ids[0]), UnitClass::Word);
        assert_eq!(doc.classify(ids[1]), UnitClass::Separator);
        assert_eq!(doc.classify(punct), UnitClass::Other);
        assert_eq!(doc.classify(p), UnitClass::Other);
        assert_eq!(doc.classify(9999), UnitClass::Other);
    }

    #[test]
    fn test_append_rejects_invalid_parents_and_words() {
        let (mut doc, _, ids) = sample();
        assert!(doc.append_text(ids[0], "x").is_err());
        assert!(doc.append_element(4242, "p").is_err());
        assert!(doc.append_word(doc.root(), "two words").is_err());
        assert!(doc.append_word(doc.root(), "").is_err());
    }

    #[test]
    fn test_replace_with_renumbers_siblings() {
        let mut doc = Document::new();
        let p = doc.append_element(doc.root(), "p").unwrap();
        let text = doc.append_text(p, "one two").unwrap();
        let tail = doc.append_word(p, "tail").unwrap();

        let inserted = doc
            .replace_with(
                text,
                vec![
                    NodeKind::Word("one".into()),
                    NodeKind::Text(" ".into()),
                    NodeKind::Word("two".into()),
                ],
            )
            .unwrap();

        assert_eq!(doc.children(p).len(), 4);
        assert_eq!(doc.parent(text), None);
        assert_eq!(doc.ordinal(tail), Some(3));
        assert_eq!(doc.next_sibling(inserted[2]), Some(tail));
        assert_eq!(doc.text_content(p), "one twotail");
    }

    #[test]
    fn test_contains_and_words() {
        let (mut doc, p, ids) = sample();
        let em = doc.append_element(p, "em").unwrap();
        let inner = doc.append_word(em, "gamma").unwrap();
        assert!(doc.contains(p, inner));
        assert!(doc.contains(p, p));
        assert!(!doc.contains(em, ids[0]));
        assert_eq!(doc.words(), vec![ids[0], ids[2], inner]);
        assert_eq!(doc.depth(inner), 3);
    }
}
