//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the loupe viewer:
//! - Header panel (file controls)
//! - Text panel (scrollable document view)
//! - Status bar (document and magnifier state)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pointer, scroll and resize observation)

pub mod header;
pub mod text_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
