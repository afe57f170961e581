//! State management modules for the loupe viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Document state (segmented document, file path)
//! - Viewport state (scroll and size change detection)
//! - Frame layout (rendered node geometry, hit testing)
//! - Pointer state (enter/leave synthesis)

mod document_state;
mod viewport;
mod frame_layout;
mod pointer;

pub use document_state::DocumentState;
pub use viewport::ViewportState;
pub use frame_layout::FrameLayout;
pub use pointer::PointerState;
