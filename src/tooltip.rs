//! Hover/Tooltip Timer - debounced show/hide scheduling.
//!
//! ## State Transitions
//!
//! ```text
//! Hidden -> (show pending) -> Visible -> (hide pending) -> Hidden
//! ```
//!
//! At most one timer is pending. A show request cancels a pending hide and a
//! hide request cancels a pending show, so the last request wins. A hide is
//! always deferred to the next `tick`, even with a zero delay; that gap is what
//! lets the pointer move from the marker onto the tooltip without a flicker.
//!
//! Timers are deadlines, not threads: the host calls [`TooltipTimer::tick`]
//! from its event loop (use [`TooltipTimer::next_deadline`] to arm a real
//! timer) and dropping the value cancels everything.

use crate::constants::{DEFAULT_TOOLTIP_HIDE_DELAY_MS, DEFAULT_TOOLTIP_SHOW_DELAY_MS};
use crate::types::{AnchorPoint, Rect};
use std::time::{Duration, Instant};
use tracing::trace;

/// Source of the anchored element's current viewport rect, queried at show time.
pub trait ElementBounds {
    fn bounds(&self) -> Option<Rect>;
}

impl ElementBounds for Rect {
    fn bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl<F> ElementBounds for F
where
    F: Fn() -> Option<Rect>,
{
    fn bounds(&self) -> Option<Rect> {
        self()
    }
}

/// Show/hide delays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipSettings {
    pub show_delay: Duration,
    pub hide_delay: Duration,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            show_delay: Duration::from_millis(DEFAULT_TOOLTIP_SHOW_DELAY_MS),
            hide_delay: Duration::from_millis(DEFAULT_TOOLTIP_HIDE_DELAY_MS),
        }
    }
}

impl TooltipSettings {
    pub fn from_millis(show_ms: u64, hide_ms: u64) -> Self {
        Self {
            show_delay: Duration::from_millis(show_ms),
            hide_delay: Duration::from_millis(hide_ms),
        }
    }
}

/// A visibility change produced by a request or a fired timer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipTransition {
    Shown(Option<AnchorPoint>),
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingTimer {
    Show(Instant),
    Hide(Instant),
}

impl PendingTimer {
    fn deadline(self) -> Instant {
        match self {
            Self::Show(at) | Self::Hide(at) => at,
        }
    }
}

/// Per-marker tooltip visibility with cancellable show/hide timers.
#[derive(Debug, Default)]
pub struct TooltipTimer {
    settings: TooltipSettings,
    visible: bool,
    anchor: Option<AnchorPoint>,
    pending: Option<PendingTimer>,
}

impl TooltipTimer {
    pub fn new(settings: TooltipSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> TooltipSettings {
        self.settings
    }

    /// Raw timer state; renderers should also check the owner's drag state.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Anchor computed at the last show.
    pub fn anchor(&self) -> Option<AnchorPoint> {
        self.anchor
    }

    pub fn show_pending(&self) -> bool {
        matches!(self.pending, Some(PendingTimer::Show(_)))
    }

    pub fn hide_pending(&self) -> bool {
        matches!(self.pending, Some(PendingTimer::Hide(_)))
    }

    /// When the pending timer is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(PendingTimer::deadline)
    }

    /// Pointer entered the marker or the tooltip.
    pub fn request_show(
        &mut self,
        now: Instant,
        element: &impl ElementBounds,
    ) -> Option<TooltipTransition> {
        if self.hide_pending() {
            trace!("Tooltip hide cancelled by show request");
        }
        self.pending = None;

        if self.settings.show_delay.is_zero() {
            Some(self.show(element))
        } else {
            self.pending = Some(PendingTimer::Show(now + self.settings.show_delay));
            None
        }
    }

    /// Pointer left the marker or the tooltip.
    pub fn request_hide(&mut self, now: Instant) {
        if self.show_pending() {
            trace!("Tooltip show cancelled by hide request");
        }
        self.pending = Some(PendingTimer::Hide(now + self.settings.hide_delay));
    }

    /// Fire the pending timer if it is due at `now`.
    pub fn tick(&mut self, now: Instant, element: &impl ElementBounds) -> Option<TooltipTransition> {
        let pending = self.pending?;
        if now < pending.deadline() {
            return None;
        }

        self.pending = None;
        match pending {
            PendingTimer::Show(_) => Some(self.show(element)),
            PendingTimer::Hide(_) => {
                self.visible = false;
                trace!("Tooltip hidden");
                Some(TooltipTransition::Hidden)
            }
        }
    }

    /// Drop any pending timer without firing it.
    pub fn cancel_all(&mut self) {
        self.pending = None;
    }

    fn show(&mut self, element: &impl ElementBounds) -> TooltipTransition {
        // Without a rect the previous anchor is kept
        if let Some(rect) = element.bounds() {
            self.anchor = Some(rect.top_center());
        }
        self.visible = true;
        trace!(anchor = ?self.anchor, "Tooltip shown");
        TooltipTransition::Shown(self.anchor)
    }
}
