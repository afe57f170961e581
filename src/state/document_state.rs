//! Loaded document and file state management.
//!
//! This module encapsulates all state related to the text being displayed,
//! including the segmented document itself and the file it came from.

use rloupe::Document;
use std::path::PathBuf;

/// State related to the loaded document.
///
/// Responsibilities:
/// - Managing document lifetime
/// - Tracking source file path
/// - Caching the word count for status display
#[derive(Default)]
pub struct DocumentState {
    /// The currently loaded, segmented document (if any)
    document: Option<Document>,
    /// Path to the currently loaded file (None for the built-in sample)
    file_path: Option<PathBuf>,
    /// Number of word units in the document
    word_count: usize,
}

impl DocumentState {
    /// Creates a new document state with nothing loaded.
    pub fn new() -> Self {
        Self {
            document: None,
            file_path: None,
            word_count: 0,
        }
    }

    /// Installs a freshly segmented document.
    ///
    /// # Arguments
    /// * `document` - The segmented document
    /// * `path` - Optional file path (None for the built-in sample)
    pub fn load_document(&mut self, document: Document, path: Option<PathBuf>) {
        self.word_count = document.words().len();
        self.document = Some(document);
        self.file_path = path;
    }

    /// Clears all document state.
    pub fn clear(&mut self) {
        self.document = None;
        self.file_path = None;
        self.word_count = 0;
    }

    /// Returns the loaded document, if any.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Returns the file path of the loaded document, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Returns the number of word units in the document.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}
