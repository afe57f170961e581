//! Host events the magnifier subscribes to.

use crate::document::NodeId;

/// The four event subscriptions registered at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerEnter,
    PointerLeave,
    Scroll,
    Resize,
}

/// Something the pointer can be over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A node of the document
    Node(NodeId),
    /// The magnifier overlay itself
    Overlay,
}

/// Event delivered to the magnifier by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The pointer moved onto `target`
    PointerEnter { target: PointerTarget },
    /// The pointer left something; `moved_to` is `None` when the pointer
    /// left the viewport or the host cannot tell where it went
    PointerLeave { moved_to: Option<PointerTarget> },
    Scroll,
    Resize,
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerEnter { .. } => EventKind::PointerEnter,
            HostEvent::PointerLeave { .. } => EventKind::PointerLeave,
            HostEvent::Scroll => EventKind::Scroll,
            HostEvent::Resize => EventKind::Resize,
        }
    }
}
