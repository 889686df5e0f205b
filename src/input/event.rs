//! Raw input events accepted from the host input system.

use crate::types::Rect;

/// One touch contact in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Pointer and touch events, mouse and touch kept distinct so the drag
/// engine can unify them in one place.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Press on the marker; carries the container rect measured at press time.
    MouseDown { container: Option<Rect> },
    MouseMove { client_x: f64, client_y: f64 },
    MouseUp,
    TouchStart { container: Option<Rect> },
    /// Currently active touches, in host order.
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd,
    TouchCancel,
}

impl PointerEvent {
    pub fn mouse_move(client_x: f64, client_y: f64) -> Self {
        Self::MouseMove { client_x, client_y }
    }

    pub fn touch_move(touches: &[(f64, f64)]) -> Self {
        Self::TouchMove {
            touches: touches
                .iter()
                .map(|&(x, y)| TouchPoint::new(x, y))
                .collect(),
        }
    }

    /// Container rect if this event starts a drag.
    pub fn start_container(&self) -> Option<Option<Rect>> {
        match self {
            Self::MouseDown { container } | Self::TouchStart { container } => Some(*container),
            _ => None,
        }
    }

    /// Client point driving a move, if this is a move with at least one contact.
    ///
    /// Only the first touch counts; extra simultaneous touches are ignored.
    pub fn move_point(&self) -> Option<(f64, f64)> {
        match self {
            Self::MouseMove { client_x, client_y } => Some((*client_x, *client_y)),
            Self::TouchMove { touches } => touches.first().map(|t| (t.client_x, t.client_y)),
            _ => None,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Self::MouseMove { .. } | Self::TouchMove { .. })
    }

    /// Mouse up, touch end and touch cancel all end a drag the same way.
    pub fn is_release(&self) -> bool {
        matches!(self, Self::MouseUp | Self::TouchEnd | Self::TouchCancel)
    }
}

/// Keys the marker reacts to. Everything else arrives as `Other`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Other(String),
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowUp"`, `"Enter"`, `" "`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Enter" => Self::Enter,
            " " | "Space" | "Spacebar" => Self::Space,
            other => Self::Other(other.to_string()),
        }
    }
}

/// What a click on the canvas landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The bare surface or a zone cell.
    Surface,
    Marker,
    Tooltip,
    Button,
}

impl ClickTarget {
    /// Clicks on interactive children are theirs, not the canvas's.
    pub fn is_interactive(self) -> bool {
        !matches!(self, Self::Surface)
    }
}
