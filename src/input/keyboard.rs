//! Keyboard stepping for focused markers.

use crate::constants::KEYBOARD_STEP;
use crate::input::coords::clamp_position;
use crate::input::event::Key;
use crate::types::Position;

/// What a key press asks the marker to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    /// Move by a delta in surface percent
    Step { dx: f64, dy: f64 },
    /// Activate, same as a click
    Activate,
}

/// Map a key to its action with the given step size. Unhandled keys map to
/// `None` and the host keeps their default behavior.
pub fn key_action(key: &Key, step: f64) -> Option<KeyAction> {
    match key {
        Key::ArrowUp => Some(KeyAction::Step { dx: 0.0, dy: -step }),
        Key::ArrowDown => Some(KeyAction::Step { dx: 0.0, dy: step }),
        Key::ArrowLeft => Some(KeyAction::Step { dx: -step, dy: 0.0 }),
        Key::ArrowRight => Some(KeyAction::Step { dx: step, dy: 0.0 }),
        Key::Enter | Key::Space => Some(KeyAction::Activate),
        Key::Other(_) => None,
    }
}

/// Key mapping with the default step.
pub fn default_key_action(key: &Key) -> Option<KeyAction> {
    key_action(key, KEYBOARD_STEP)
}

/// Position after stepping, clamped to the surface.
pub fn step_position(current: Position, dx: f64, dy: f64) -> Position {
    clamp_position(current.offset(dx, dy))
}
