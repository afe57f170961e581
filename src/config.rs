//! Magnifier configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for phrase assembly and overlay behaviour.
///
/// Fixed for the lifetime of a `Magnifier`; the GUI persists it between
/// sessions as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnifierConfig {
    /// Maximum number of word units shown before the hovered one
    pub words_before: usize,
    /// Maximum number of word units shown after the hovered one
    pub words_after: usize,
    /// Debounce applied to pointer-leave before hiding (milliseconds)
    pub hide_delay_ms: u64,
    /// Overlay text size in points
    pub font_size: f32,
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        Self {
            words_before: 2,
            words_after: 2,
            hide_delay_ms: 50,
            font_size: 72.0,
        }
    }
}

impl MagnifierConfig {
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    /// Largest possible phrase window.
    pub fn window_capacity(&self) -> usize {
        self.words_before + 1 + self.words_after
    }
}
