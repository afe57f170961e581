//! Asynchronous document loading state management.

/// Holds the state of an async document loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
/// This struct is wrapped in an `Arc<Mutex<>>` to allow safe sharing between
/// the main thread and the background loading thread.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// True if a document is currently being read and segmented
    pub in_progress: bool,
}

impl LoadingState {
    /// Creates a new loading state that is not in progress.
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}
