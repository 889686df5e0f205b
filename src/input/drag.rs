//! Drag Engine - unifies mouse and touch input into start/move/end.
//!
//! ## Performance Notes
//!
//! Move events arrive very frequently during a drag (potentially 60+ times
//! per second). Each one is handled independently and in delivery order:
//! - Early exit when idle
//! - One percentage conversion against the rect captured at start
//! - No batching or coalescing
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::input::coords::CoordinateConverter;
use crate::input::event::PointerEvent;
use crate::input::listeners::{GlobalListeners, ListenerGuard, NoopListeners};
use crate::input::state::{DragSession, DragState};
use crate::profile_scope;
use crate::types::{Position, Rect};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// What a processed pointer event produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutput {
    Started,
    Moved(Position),
    Ended,
}

/// Drag state machine bound to one marker.
pub struct DragEngine {
    owner: String,
    state: DragState,
    disabled: bool,
    listeners: Arc<dyn GlobalListeners>,
    /// `has_moved` of the most recent finished session
    last_session_moved: bool,
    last_drag_end: Option<Instant>,
}

impl DragEngine {
    pub fn new(owner: impl Into<String>, listeners: Arc<dyn GlobalListeners>) -> Self {
        Self {
            owner: owner.into(),
            state: DragState::Idle,
            disabled: false,
            listeners,
            last_session_moved: false,
            last_drag_end: None,
        }
    }

    /// Engine whose host routes document events without a listener bus.
    pub fn detached(owner: impl Into<String>) -> Self {
        Self::new(owner, Arc::new(NoopListeners))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disabling blocks future starts; an active session runs to completion.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the active session, or the last finished one, saw a move.
    pub fn has_moved(&self) -> bool {
        match self.state.session() {
            Some(session) => session.has_moved,
            None => self.last_session_moved,
        }
    }

    pub fn last_drag_end(&self) -> Option<Instant> {
        self.last_drag_end
    }

    /// True if the last drag ended less than `window` before `now`.
    pub fn ended_within(&self, now: Instant, window: Duration) -> bool {
        self.last_drag_end
            .is_some_and(|end| now.saturating_duration_since(end) < window)
    }

    /// Idle -> Dragging. Rejected (false) when disabled or already dragging.
    pub fn start(&mut self, container: Option<Rect>, now: Instant) -> bool {
        if self.disabled {
            debug!(owner = %self.owner, "Drag start ignored: marker disabled");
            return false;
        }
        if self.state.is_dragging() {
            debug!(owner = %self.owner, "Drag start ignored: session already active");
            return false;
        }

        let guard = ListenerGuard::acquire(self.listeners.clone(), &self.owner);
        self.last_session_moved = false;
        self.state
            .start(DragSession::new(container, now, Some(guard)));
        debug!(owner = %self.owner, ?container, "Drag started");
        true
    }

    /// Handle one move while dragging and return the new surface position.
    ///
    /// The move always counts as movement; the position is `None` when the
    /// container geometry or the coordinates are unusable.
    pub fn handle_move(&mut self, client_x: f64, client_y: f64) -> Option<Position> {
        profile_scope!("drag_move");

        let session = self.state.session_mut()?;
        session.has_moved = true;
        session.move_count += 1;

        let Some(container) = session.container else {
            debug!(owner = %self.owner, "Drag move dropped: no container geometry");
            return None;
        };

        match CoordinateConverter::client_to_surface(client_x, client_y, &container) {
            Some(position) => {
                trace!(owner = %self.owner, x = position.x, y = position.y, "Drag move");
                Some(position)
            }
            None => {
                debug!(
                    owner = %self.owner,
                    client_x,
                    client_y,
                    "Drag move dropped: unusable geometry"
                );
                None
            }
        }
    }

    /// Dragging -> Idle, recording the end time. False when idle.
    pub fn end(&mut self, now: Instant) -> bool {
        let Some(session) = self.state.finish() else {
            return false;
        };

        self.last_session_moved = session.has_moved;
        self.last_drag_end = Some(now);
        debug!(
            owner = %self.owner,
            moved = session.has_moved,
            moves = session.move_count,
            "Drag ended"
        );
        // Dropping the session releases its listeners
        drop(session);
        true
    }

    /// Host-initiated cancel (lost pointer capture, Escape). Ends the session
    /// like a release, so the end time still feeds click suppression.
    pub fn cancel(&mut self, now: Instant) -> bool {
        if self.state.is_dragging() {
            debug!(owner = %self.owner, "Drag cancelled by host");
        }
        self.end(now)
    }

    /// Abandon any session without reporting an end (marker unmounted).
    pub fn dispose(&mut self) -> bool {
        let abandoned = self.state.finish().is_some();
        if abandoned {
            debug!(owner = %self.owner, "Drag session abandoned on dispose");
        }
        abandoned
    }

    /// Feed one pointer event through the state machine.
    pub fn process(&mut self, event: &PointerEvent, now: Instant) -> Vec<DragOutput> {
        if let Some(container) = event.start_container() {
            return if self.start(container, now) {
                vec![DragOutput::Started]
            } else {
                Vec::new()
            };
        }

        if event.is_release() {
            return if self.end(now) {
                vec![DragOutput::Ended]
            } else {
                Vec::new()
            };
        }

        if !self.state.is_dragging() {
            return Vec::new();
        }

        match event.move_point() {
            Some((x, y)) => self
                .handle_move(x, y)
                .map(DragOutput::Moved)
                .into_iter()
                .collect(),
            // Touch move with no contacts
            None => Vec::new(),
        }
    }
}

impl Drop for DragEngine {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for DragEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragEngine")
            .field("owner", &self.owner)
            .field("dragging", &self.is_dragging())
            .field("disabled", &self.disabled)
            .finish()
    }
}
