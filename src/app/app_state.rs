//! Centralized application state for the loupe viewer.
//!
//! This module composes focused state components that each manage a
//! specific aspect of the application's state. This approach:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::state::{DocumentState, FrameLayout, PointerState, ViewportState};
use rloupe::{Magnifier, MagnifierConfig};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Loaded document and file state
    pub document: DocumentState,

    /// Scroll and resize change detection
    pub viewport: ViewportState,

    /// Geometry of the nodes rendered this frame
    pub layout: FrameLayout,

    /// Pointer target seen on the previous frame
    pub pointer: PointerState,

    /// The page-wide magnifier context (hover tracking + overlay)
    pub magnifier: Magnifier,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MagnifierConfig::default())
    }
}

impl AppState {
    /// Creates a new application state with the given magnifier settings.
    pub fn new(config: MagnifierConfig) -> Self {
        let (magnifier, subscriptions) = Magnifier::init(config);
        log::debug!("host wiring subscriptions: {:?}", subscriptions);

        Self {
            document: DocumentState::new(),
            viewport: ViewportState::new(),
            layout: FrameLayout::new(),
            pointer: PointerState::new(),
            magnifier,
            error_message: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets document-related state when loading a new document.
    ///
    /// The magnifier is re-initialised so no tracked unit from the old
    /// document survives.
    pub fn reset_document_state(&mut self) {
        let config = self.magnifier.config().clone();
        self.document.clear();
        self.viewport.reset();
        self.layout.begin_frame();
        self.pointer.reset();
        self.magnifier = Magnifier::init(config).0;
        self.error_message = None;
    }
}
