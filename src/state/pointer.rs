//! Pointer target tracking between frames.
//!
//! egui reports a pointer position, not enter/leave notifications. This
//! module diffs the hovered target against the previous frame and turns
//! each change into the leave-then-enter pair a page would deliver.

use rloupe::{HostEvent, PointerTarget};

/// State related to what the pointer was over on the previous frame.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Target under the pointer on the previous frame
    last_target: Option<PointerTarget>,
}

impl PointerState {
    /// Creates a new pointer state with nothing hovered.
    pub fn new() -> Self {
        Self { last_target: None }
    }

    /// Forgets the previous target.
    pub fn reset(&mut self) {
        self.last_target = None;
    }

    /// Returns the target hovered on the last frame.
    pub fn last_target(&self) -> Option<PointerTarget> {
        self.last_target
    }

    /// Records this frame's target and returns the events the change implies.
    ///
    /// # Arguments
    /// * `current` - Target under the pointer now (None outside the viewport)
    pub fn transition(&mut self, current: Option<PointerTarget>) -> Vec<HostEvent> {
        if current == self.last_target {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if self.last_target.is_some() {
            events.push(HostEvent::PointerLeave { moved_to: current });
        }
        if let Some(target) = current {
            events.push(HostEvent::PointerEnter { target });
        }
        self.last_target = current;
        events
    }
}
