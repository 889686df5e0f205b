//! Library-wide constants.
//!
//! Centralizes magic numbers and timing values to make the codebase
//! more maintainable and self-documenting.

use std::time::Duration;

// ============================================================================
// Surface
// ============================================================================

/// Lower bound of both surface axes (percent)
pub const SURFACE_MIN: f64 = 0.0;

/// Upper bound of both surface axes (percent)
pub const SURFACE_MAX: f64 = 100.0;

/// Center of the surface on both axes (percent)
pub const SURFACE_CENTER: f64 = 50.0;

// ============================================================================
// Default Placement
// ============================================================================

/// Distance between neighbouring default positions inside a zone (percent)
pub const DEFAULT_PLACEMENT_SPACING: f64 = 8.0;

/// Side length of the default placement pattern (3x3 = 9 slots)
pub const DEFAULT_PLACEMENT_PATTERN: usize = 3;

// ============================================================================
// Keyboard
// ============================================================================

/// Distance a marker moves per arrow key press (percent)
pub const KEYBOARD_STEP: f64 = 2.0;

// ============================================================================
// Click Suppression & Timing
// ============================================================================

/// Clicks on a marker within this window after its drag ended are ignored
pub const DRAG_END_CLICK_THRESHOLD_MS: u64 = 150;

/// Default canvas-level click delay after any drag ends (0 disables it)
pub const DEFAULT_DRAG_END_CLICK_DELAY_MS: u64 = 0;

/// Default delay before a tooltip appears
pub const DEFAULT_TOOLTIP_SHOW_DELAY_MS: u64 = 0;

/// Default delay before a tooltip disappears
pub const DEFAULT_TOOLTIP_HIDE_DELAY_MS: u64 = 200;

// ============================================================================
// Rendering Hints
// ============================================================================

/// Stacking order for a marker at rest
pub const Z_INDEX_RESTING: i32 = 10;

/// Stacking order for a hovered marker
pub const Z_INDEX_HOVERED: i32 = 50;

/// Stacking order for a dragged marker
pub const Z_INDEX_DRAGGING: i32 = 1000;

// ============================================================================
// Logging
// ============================================================================

/// Environment variable read by `logging::init`
pub const LOG_ENV_VAR: &str = "MATRIX_CANVAS_LOG";

/// Budget for one pass through an input hot path before a warning is logged
pub const SLOW_INPUT_BUDGET: Duration = Duration::from_millis(4);

/// Budget for `profile_scope!` timers
pub const PROFILE_BUDGET: Duration = Duration::from_millis(1);
