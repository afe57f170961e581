//! Asynchronous text file loading.
//!
//! This module reads and segments text files in background threads,
//! keeping the GUI responsive on large inputs.

use crate::io::LoadingState;
use eframe::egui;
use rloupe::Document;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

/// Result of a completed loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The segmented document
        document: Document,
        /// Path to the file that was loaded
        path: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation finished since the last check
    None,
}

/// Manages asynchronous loading of text files.
///
/// This struct coordinates background thread file loading with the main GUI thread.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Document, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        lock_state(&self.loading_state).in_progress
    }

    /// Starts loading a text file asynchronously from the specified path.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the text file to load
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        lock_state(&self.loading_state).in_progress = true;
        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        log::info!("loading {}", path.display());
        thread::spawn(move || {
            let result = rloupe::load_document(&path).map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);

            lock_state(&loading_state).in_progress = false;
            ctx_handle.request_repaint();
        });
    }

    /// Checks if background loading has completed and returns the result if available.
    ///
    /// # Returns
    /// * `LoadResult::Success` - Loading completed successfully
    /// * `LoadResult::Error` - Loading failed with an error
    /// * `LoadResult::None` - No result available (still loading or no operation active)
    pub fn check_completion(&mut self) -> LoadResult {
        let result = match &self.loading_receiver {
            Some(receiver) => match receiver.try_recv() {
                Ok(result) => result,
                Err(_) => return LoadResult::None,
            },
            None => return LoadResult::None,
        };
        self.loading_receiver = None;
        let path = self.pending_load_path.take();

        match (result, path) {
            (Ok(document), Some(path)) => LoadResult::Success { document, path },
            (Ok(_), None) => LoadResult::Error("load finished without a pending path".to_string()),
            (Err(error_msg), _) => LoadResult::Error(error_msg),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_state(state: &Mutex<LoadingState>) -> MutexGuard<'_, LoadingState> {
    // A panicked loader thread leaves a plain bool behind
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
