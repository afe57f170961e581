//! Plain-text document loading.
//!
//! Blank-line separated paragraphs become `p` elements. Inline `*spans*`
//! become `em` elements, which act as phrase boundaries. The result is
//! segmented into word units before it is returned.

use crate::document::{Document, NodeId};
use crate::tokenizer::segment_document;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Builds and segments a document from plain text.
pub fn parse_plain_text(text: &str) -> Result<Document> {
    let mut doc = Document::new();
    let root = doc.root();

    for paragraph in split_paragraphs(text) {
        let p = doc.append_element(root, "p")?;
        append_inline(&mut doc, p, paragraph)?;
    }

    segment_document(&mut doc, root)?;
    Ok(doc)
}

/// Reads a text file (or stdin for `-`) and parses it.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read text from stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    let doc = parse_plain_text(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    log::info!("loaded {} words from {}", doc.words().len(), path.display());
    Ok(doc)
}

fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                paragraphs.push(text[s..end].trim_end());
            }
        } else {
            if start.is_none() {
                start = Some(offset);
            }
            end = offset + line.len();
        }
        offset += line.len();
    }
    if let Some(s) = start {
        paragraphs.push(text[s..end].trim_end());
    }

    paragraphs
}

fn append_inline(doc: &mut Document, parent: NodeId, paragraph: &str) -> Result<()> {
    let pieces: Vec<&str> = paragraph.split('*').collect();
    // An unmatched trailing marker is kept literally
    let balanced = pieces.len() % 2 == 1;

    for (index, piece) in pieces.iter().enumerate() {
        let emphasised = index % 2 == 1;
        let is_last = index == pieces.len() - 1;

        if emphasised && !(is_last && !balanced) {
            if !piece.is_empty() {
                let em = doc.append_element(parent, "em")?;
                doc.append_text(em, piece)?;
            }
        } else if emphasised {
            doc.append_text(parent, &format!("*{}", piece))?;
        } else if !piece.is_empty() {
            doc.append_text(parent, piece)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::UnitClass;

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let doc = parse_plain_text("first para\ncontinues\n\n\nsecond\n").unwrap();
        let paragraphs = doc.children(doc.root());
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(doc.text_content(paragraphs[0]), "first para\ncontinues");
        assert_eq!(doc.text_content(paragraphs[1]), "second");
    }

    #[test]
    fn test_emphasis_becomes_element() {
        let doc = parse_plain_text("plain *loud words* plain").unwrap();
        let p = doc.children(doc.root())[0];
        let em = doc
            .children(p)
            .iter()
            .copied()
            .find(|&c| doc.tag(c) == Some("em"))
            .unwrap();
        assert_eq!(doc.text_content(em), "loud words");
        assert_eq!(doc.classify(em), UnitClass::Other);
        assert_eq!(doc.words().len(), 4);
    }

    #[test]
    fn test_unmatched_marker_is_literal() {
        let doc = parse_plain_text("a *b").unwrap();
        let p = doc.children(doc.root())[0];
        assert_eq!(doc.text_content(p), "a *b");
        assert_eq!(doc.words().len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let doc = parse_plain_text("\n\n  \n").unwrap();
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_document(Path::new("/nonexistent/rloupe.txt")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/rloupe.txt"));
    }
}
