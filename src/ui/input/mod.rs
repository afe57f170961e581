//! Input handling subsystem for UI interactions.
//!
//! This module turns per-frame egui input into magnifier host events:
//! - Pointer enter/leave derived from hit testing
//! - Scroll and resize derived from viewport changes

pub mod pointer_input_handler;
