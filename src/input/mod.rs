//! Pointer, touch and keyboard input handling for markers.
//!
//! ## Architecture
//!
//! The drag engine uses an explicit state machine (`DragState`) to track
//! whether a marker is being dragged. This replaces scattered boolean flags
//! and makes impossible states unrepresentable.
//!
//! ## Modules
//!
//! - `coords` - Clamping and client-to-surface coordinate conversion
//! - `event` - Raw pointer/touch/key events from the host
//! - `state` - Drag state machine enum and session data
//! - `listeners` - Scoped document-level listener subscriptions
//! - `drag` - Start/move/end handling for mouse and touch
//! - `keyboard` - Arrow-key stepping and activation keys

pub mod coords;
pub mod event;
pub mod keyboard;
pub mod listeners;
mod drag;
mod state;

pub use drag::{DragEngine, DragOutput};
pub use event::{ClickTarget, Key, PointerEvent, TouchPoint};
pub use keyboard::KeyAction;
pub use listeners::{GlobalListeners, ListenerGuard, ListenerRegistry, ListenerToken, NoopListeners};
pub use state::{DragSession, DragState};
