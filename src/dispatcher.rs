//! Delegated hover dispatch and the page-wide magnifier context.
//!
//! `Magnifier` is the single owner of the hover tracking and the overlay
//! controller. Every host event goes through `dispatch`; due hide timers
//! fire from `poll`. Nothing here blocks: the host decides when to call
//! back in, using `next_deadline` to schedule its wakeup.

use crate::config::MagnifierConfig;
use crate::document::{Document, NodeId, UnitClass};
use crate::event::{EventKind, HostEvent, PointerTarget};
use crate::extract::extract;
use crate::layout::LayoutHost;
use crate::overlay::OverlayController;
use crate::phrase::resolve;
use egui::Vec2;
use std::time::Instant;

/// Subscriptions the host must wire at initialization.
pub const SUBSCRIPTIONS: [EventKind; 4] = [
    EventKind::PointerEnter,
    EventKind::PointerLeave,
    EventKind::Scroll,
    EventKind::Resize,
];

/// Which word unit, if any, the pointer is currently on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracking {
    current: Option<NodeId>,
}

impl HoverTracking {
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Returns the parent container of the tracked unit.
    pub fn container(&self, doc: &Document) -> Option<NodeId> {
        self.current.and_then(|unit| doc.parent(unit))
    }

    fn track(&mut self, unit: NodeId) {
        self.current = Some(unit);
    }

    fn clear(&mut self) {
        self.current = None;
    }
}

/// Page-wide magnifier context.
#[derive(Debug, Clone)]
pub struct Magnifier {
    config: MagnifierConfig,
    tracking: HoverTracking,
    overlay: OverlayController,
    /// Number of resolve/show cycles run so far
    resolve_count: u64,
}

impl Magnifier {
    /// Creates the context and returns the subscriptions the host must wire.
    pub fn init(config: MagnifierConfig) -> (Self, [EventKind; 4]) {
        log::info!(
            "magnifier initialised: {} before, {} after, {} ms hide delay",
            config.words_before,
            config.words_after,
            config.hide_delay_ms
        );
        let magnifier = Self {
            config,
            tracking: HoverTracking::default(),
            overlay: OverlayController::new(),
            resolve_count: 0,
        };
        (magnifier, SUBSCRIPTIONS)
    }

    // ===== Queries =====

    pub fn config(&self) -> &MagnifierConfig {
        &self.config
    }

    pub fn tracking(&self) -> &HoverTracking {
        &self.tracking
    }

    pub fn overlay(&self) -> &OverlayController {
        &self.overlay
    }

    pub fn resolve_count(&self) -> u64 {
        self.resolve_count
    }

    /// Returns when the host should call `poll` next, if a hide is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.overlay.next_deadline()
    }

    // ===== Event Handling =====

    /// Routes one host event.
    ///
    /// # Arguments
    /// * `doc` - The segmented document
    /// * `layout` - Host measurement services
    /// * `event` - The event to handle
    /// * `now` - Current time, used to arm the hide debounce
    pub fn dispatch<L: LayoutHost + ?Sized>(&mut self, doc: &Document, layout: &L, event: HostEvent, now: Instant) {
        match event {
            HostEvent::PointerEnter { target } => self.on_pointer_enter(doc, layout, target),
            HostEvent::PointerLeave { moved_to } => {
                self.overlay.schedule_hide(now, self.config.hide_delay(), moved_to);
            }
            HostEvent::Scroll | HostEvent::Resize => {
                // Position would desync from the content
                self.overlay.hide();
                self.tracking.clear();
            }
        }
    }

    fn on_pointer_enter<L: LayoutHost + ?Sized>(&mut self, doc: &Document, layout: &L, target: PointerTarget) {
        let unit = match target {
            PointerTarget::Node(node) if doc.classify(node) == UnitClass::Word => node,
            _ => {
                self.overlay.hide();
                self.tracking.clear();
                return;
            }
        };

        if self.tracking.current() == Some(unit) {
            self.overlay.cancel_pending_hide();
            return;
        }
        self.tracking.track(unit);

        let window = resolve(doc, unit, self.config.words_before, self.config.words_after);
        self.resolve_count += 1;
        match extract(doc, layout, &window) {
            Some(phrase) => self.overlay.show(&phrase.text, phrase.rect, layout.scroll_offset()),
            None => self.overlay.hide(),
        }
    }

    /// Fires the pending hide if its deadline passed.
    ///
    /// Returns true if the overlay was hidden by this call. A hide also
    /// clears tracking.
    pub fn poll(&mut self, doc: &Document, now: Instant) -> bool {
        let tracking = self.tracking;
        let hidden = self
            .overlay
            .fire_due(now, |moved_to| should_hide(doc, &tracking, moved_to))
            .unwrap_or(false);
        if hidden {
            // A hidden overlay tracks no word
            self.tracking.clear();
        }
        hidden
    }

    /// Reports the overlay's rendered size after a render pass.
    ///
    /// Returns true if the overlay moved and needs another paint.
    pub fn overlay_rendered(&mut self, size: Vec2) -> bool {
        self.overlay.on_rendered(size)
    }
}

/// Hide unless the pointer went onto the overlay or stayed inside the
/// tracked unit's container. An unknown destination always hides.
fn should_hide(doc: &Document, tracking: &HoverTracking, moved_to: Option<PointerTarget>) -> bool {
    match moved_to {
        None => true,
        // Only hosts with an interactive overlay report this destination
        Some(PointerTarget::Overlay) => false,
        Some(PointerTarget::Node(node)) => match tracking.container(doc) {
            Some(container) => !doc.contains(container, node),
            None => true,
        },
    }
}
