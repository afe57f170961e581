//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like document loading, error
//! handling, and feeding host events into the magnifier.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use rloupe::HostEvent;
use std::path::PathBuf;
use std::time::Instant;

/// Text shown when no file is given.
pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog. \
Move the pointer across these words and the magnifier follows, showing two \
words of context on either side.

Phrases stop at *emphasised spans* and at punctuation that stands on its own - \
like that dash. Whitespace between words, however wide,    is    skipped.

Scroll or resize the window and the magnifier hides until the pointer \
lands on the next word.";

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing file loading workflows
/// - Handling loading completion
/// - Routing host events into the magnifier
/// - Managing error states
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous file loading.
    ///
    /// Immediately clears the previous document to show the loading indicator.
    pub fn open_file(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.reset_document_state();
        loader.start_file_load(path, ctx);
    }

    /// Loads the built-in sample text synchronously.
    pub fn open_sample(state: &mut AppState) {
        state.reset_document_state();
        match rloupe::parse_plain_text(SAMPLE_TEXT) {
            Ok(document) => state.document.load_document(document, None),
            Err(e) => {
                log::error!("sample text failed to parse: {:#}", e);
                state.error_message = Some(format!("Error loading sample: {:#}", e));
            }
        }
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { document, path } => {
                state.document.load_document(document, Some(path));
                state.error_message = None;
                true
            }
            LoadResult::Error(error_msg) => {
                log::error!("{}", error_msg);
                state.error_message = Some(format!("Error loading text: {}", error_msg));
                state.document.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Delivers host events to the magnifier in order.
    pub fn dispatch_events(state: &mut AppState, events: &[HostEvent], now: Instant) {
        let document = match state.document.document() {
            Some(document) => document,
            None => return,
        };
        for &event in events {
            log::trace!("host event {:?}", event);
            state.magnifier.dispatch(document, &state.layout, event, now);
        }
    }

    /// Fires a due hide timer and schedules the next wakeup.
    pub fn poll_magnifier(state: &mut AppState, ctx: &egui::Context, now: Instant) {
        if let Some(document) = state.document.document() {
            state.magnifier.poll(document, now);
        }
        if let Some(deadline) = state.magnifier.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rloupe::{OverlayPhase, PointerTarget};

    #[test]
    fn test_sample_text_loads() {
        let mut state = AppState::default();
        ApplicationCoordinator::open_sample(&mut state);
        assert!(state.document.document().is_some());
        assert!(state.document.word_count() > 40);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_events_without_document_are_dropped() {
        let mut state = AppState::default();
        let events = [HostEvent::PointerEnter { target: PointerTarget::Node(1) }];
        ApplicationCoordinator::dispatch_events(&mut state, &events, Instant::now());
        assert_eq!(state.magnifier.resolve_count(), 0);
        assert_eq!(state.magnifier.overlay().phase(), OverlayPhase::Hidden);
    }
}
