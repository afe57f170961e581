//! The single shared magnifier overlay and its debounced hide timer.
//!
//! Phases:
//! - `Hidden` - nothing displayed
//! - `Visible` - content shown at a computed page position
//! - `PendingHide` - still visible, a one-shot hide timer is armed
//!
//! `show` always cancels an armed timer before doing anything else, so a
//! stale hide can never land after a newer show.

use crate::event::PointerTarget;
use egui::{pos2, Pos2, Rect, Vec2};
use std::time::{Duration, Instant};

/// Visibility phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Hidden,
    PendingHide,
    Visible,
}

/// State of a one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Armed,
    Fired,
}

/// Cancellable one-shot timer driven by explicit `poll` calls.
///
/// At most one firing is outstanding: arming an armed timer is refused.
#[derive(Debug, Clone)]
pub struct HideTimer<T> {
    state: TimerState,
    deadline: Option<Instant>,
    payload: Option<T>,
}

impl<T> Default for HideTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HideTimer<T> {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            deadline: None,
            payload: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Returns the firing time while armed.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            TimerState::Armed => self.deadline,
            _ => None,
        }
    }

    /// Arms the timer. Returns false if it was already armed.
    pub fn arm(&mut self, now: Instant, delay: Duration, payload: T) -> bool {
        if self.state == TimerState::Armed {
            return false;
        }
        self.state = TimerState::Armed;
        self.deadline = Some(now + delay);
        self.payload = Some(payload);
        true
    }

    /// Cancels an armed timer. Returns true if one was armed.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.state == TimerState::Armed;
        self.state = TimerState::Idle;
        self.deadline = None;
        self.payload = None;
        was_armed
    }

    /// Fires the timer if its deadline has passed, yielding its payload.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match (self.state, self.deadline) {
            (TimerState::Armed, Some(deadline)) if now >= deadline => {
                self.state = TimerState::Fired;
                self.deadline = None;
                self.payload.take()
            }
            _ => None,
        }
    }
}

/// Observable state of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    visible: bool,
    text: String,
    /// Target box in page coordinates (viewport rect plus scroll)
    anchor: Rect,
    /// Top-left corner in page coordinates
    position: Pos2,
    /// Rendered size once known
    size: Option<Vec2>,
    awaiting_measure: bool,
    /// Bumped on every write to visibility, content or position
    revision: u64,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            visible: false,
            text: String::new(),
            anchor: Rect::NOTHING,
            position: Pos2::ZERO,
            size: None,
            awaiting_measure: false,
            revision: 0,
        }
    }
}

impl OverlayState {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn anchor(&self) -> Rect {
        self.anchor
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> Option<Vec2> {
        self.size
    }

    /// True between a show and the follow-up measurement.
    pub fn awaiting_measure(&self) -> bool {
        self.awaiting_measure
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Drives the overlay's visibility, content and placement.
#[derive(Debug, Clone, Default)]
pub struct OverlayController {
    state: OverlayState,
    phase: OverlayPhase,
    hide_timer: HideTimer<Option<PointerTarget>>,
    hide_count: u64,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn timer_state(&self) -> TimerState {
        self.hide_timer.state()
    }

    /// Returns when the armed hide timer will fire, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.hide_timer.deadline()
    }

    /// Number of visible-to-hidden transitions so far.
    pub fn hide_count(&self) -> u64 {
        self.hide_count
    }

    // ===== Transitions =====

    /// Shows `text` over `rect` (viewport coordinates).
    ///
    /// The overlay is first placed at the raw target corner; `on_rendered`
    /// recenters it once its real size is known. Blank text hides instead.
    ///
    /// # Arguments
    /// * `text` - Content to display
    /// * `rect` - Target box relative to the viewport
    /// * `scroll` - Current scroll offset, converts `rect` to page space
    pub fn show(&mut self, text: &str, rect: Rect, scroll: Vec2) {
        if self.hide_timer.cancel() {
            log::debug!("show cancelled pending hide");
        }
        if text.trim().is_empty() {
            self.hide();
            return;
        }

        let anchor = rect.translate(scroll);
        self.state.visible = true;
        self.state.text = text.to_string();
        self.state.anchor = anchor;
        self.state.position = clamp_to_page(anchor.min);
        self.state.size = None;
        self.state.awaiting_measure = true;
        self.state.revision += 1;
        self.phase = OverlayPhase::Visible;

        log::debug!("overlay shown: {:?} at {:?}", self.state.text, self.state.position);
    }

    /// Recenters the overlay over its anchor once the rendered size is known.
    ///
    /// Returns true if the position changed as a result.
    pub fn on_rendered(&mut self, size: Vec2) -> bool {
        if !self.state.visible || !self.state.awaiting_measure {
            return false;
        }
        let center = self.state.anchor.center();
        let centered = clamp_to_page(pos2(center.x - size.x / 2.0, center.y - size.y / 2.0));

        self.state.awaiting_measure = false;
        self.state.size = Some(size);
        if centered == self.state.position {
            return false;
        }
        self.state.position = centered;
        self.state.revision += 1;
        true
    }

    /// Hides the overlay immediately. Idempotent.
    pub fn hide(&mut self) {
        self.hide_timer.cancel();
        if self.phase == OverlayPhase::Hidden && !self.state.visible {
            return;
        }
        self.state.visible = false;
        self.state.awaiting_measure = false;
        self.state.revision += 1;
        self.phase = OverlayPhase::Hidden;
        self.hide_count += 1;
        log::debug!("overlay hidden");
    }

    /// Arms the debounced hide.
    ///
    /// A pending hide is never restarted; the first armed timer wins.
    /// Nothing is armed while the overlay is already hidden.
    ///
    /// Returns true if a timer was armed by this call.
    pub fn schedule_hide(&mut self, now: Instant, delay: Duration, moved_to: Option<PointerTarget>) -> bool {
        if self.phase != OverlayPhase::Visible {
            return false;
        }
        let armed = self.hide_timer.arm(now, delay, moved_to);
        if armed {
            self.phase = OverlayPhase::PendingHide;
            log::debug!("hide scheduled in {:?}", delay);
        }
        armed
    }

    /// Drops a pending hide without touching content.
    pub fn cancel_pending_hide(&mut self) -> bool {
        let cancelled = self.hide_timer.cancel();
        if self.phase == OverlayPhase::PendingHide {
            self.phase = OverlayPhase::Visible;
        }
        cancelled
    }

    /// Fires the hide timer if due.
    ///
    /// `should_hide` re-evaluates the pointer destination recorded when the
    /// timer was armed. Returns `Some(true)` if the overlay was hidden,
    /// `Some(false)` if the fire was suppressed and `None` if nothing fired.
    pub fn fire_due<F>(&mut self, now: Instant, should_hide: F) -> Option<bool>
    where
        F: FnOnce(Option<PointerTarget>) -> bool,
    {
        let moved_to = self.hide_timer.poll(now)?;
        if should_hide(moved_to) {
            self.hide();
            Some(true)
        } else {
            if self.phase == OverlayPhase::PendingHide {
                self.phase = OverlayPhase::Visible;
            }
            log::debug!("pending hide suppressed, pointer still inside phrase container");
            Some(false)
        }
    }
}

fn clamp_to_page(pos: Pos2) -> Pos2 {
    pos2(pos.x.max(0.0), pos.y.max(0.0))
}
