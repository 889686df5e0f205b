//! Drag state machine - one explicit enum per draggable marker.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (mouse down / touch start on an enabled marker)
//! Dragging -> Idle    (mouse up / touch end / touch cancel / cancel / dispose)
//! ```
//!
//! A second start while `Dragging` is rejected, so at most one session exists.

use crate::input::listeners::ListenerGuard;
use crate::types::Rect;
use std::time::Instant;

/// One continuous pointer-down-to-pointer-up interaction.
#[derive(Debug)]
pub struct DragSession {
    /// Container rect measured when the session started. Never re-queried,
    /// so a container resized mid-drag keeps mapping through the old rect.
    pub container: Option<Rect>,
    /// Set on the first move event of the session.
    pub has_moved: bool,
    /// When the session started
    pub started_at: Instant,
    /// Number of move events seen, including dropped ones
    pub move_count: u32,
    /// Document listeners held for the session's lifetime
    pub(crate) listeners: Option<ListenerGuard>,
}

impl DragSession {
    pub(crate) fn new(
        container: Option<Rect>,
        started_at: Instant,
        listeners: Option<ListenerGuard>,
    ) -> Self {
        Self {
            container,
            has_moved: false,
            started_at,
            move_count: 0,
            listeners,
        }
    }

    pub fn holds_listeners(&self) -> bool {
        self.listeners.is_some()
    }
}

/// Drag state of a single marker.
#[derive(Debug, Default)]
pub enum DragState {
    /// No pointer is down on the marker
    #[default]
    Idle,

    /// Pointer is down; moves update the marker position
    Dragging(DragSession),
}

impl DragState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag session is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Get the active session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Get the active session mutably, if any
    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Container rect of the active session
    pub fn container(&self) -> Option<Rect> {
        self.session().and_then(|s| s.container)
    }

    /// Begin a session
    pub fn start(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// Reset to Idle, returning the finished session. Dropping the returned
    /// session releases its listeners.
    pub fn finish(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
