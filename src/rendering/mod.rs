//! Rendering subsystem for drawing the document and the magnifier
//!
//! This module contains all low-level rendering logic for the loupe viewer:
//! - Text rendering (blocks, inline emphasis, word labels)
//! - Overlay rendering (the floating magnified phrase)

pub mod text_renderer;
pub mod overlay_renderer;
