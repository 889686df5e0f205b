//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestLayoutBuilder` - Builder pattern for zone layouts
//! - `MarkerStore` - Caller-side marker state that applies emitted events
//! - Geometry helpers for a fixed 400x400 container

#![allow(dead_code)]

use matrix_canvas::input::PointerEvent;
use matrix_canvas::marker::MarkerHandler;
use matrix_canvas::types::AnchorPoint;
use matrix_canvas::{
    GridConfig, MarkerEvent, MarkerInput, MarkerState, Position, Rect, ZoneConfig, ZoneLayout,
};
use std::time::Duration;

// ============================================================================
// Geometry
// ============================================================================

/// Container used by most tests: 400x400 at a non-zero origin.
pub const CONTAINER: Rect = Rect::new(20.0, 10.0, 400.0, 400.0);

/// Client coordinates for a surface position inside `CONTAINER`.
pub fn client_at(x: f64, y: f64) -> (f64, f64) {
    (
        CONTAINER.left + x * CONTAINER.width / 100.0,
        CONTAINER.top + y * CONTAINER.height / 100.0,
    )
}

/// Positions equal up to conversion rounding.
pub fn near(a: Position, b: Position) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[track_caller]
pub fn assert_near(actual: Position, x: f64, y: f64) {
    assert!(
        near(actual, Position::new(x, y)),
        "expected ({x}, {y}), got ({}, {})",
        actual.x,
        actual.y
    );
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Input shorthands
// ============================================================================

pub fn mouse_down() -> MarkerInput {
    MarkerInput::Pointer(PointerEvent::MouseDown {
        container: Some(CONTAINER),
    })
}

pub fn touch_start() -> MarkerInput {
    MarkerInput::Pointer(PointerEvent::TouchStart {
        container: Some(CONTAINER),
    })
}

/// Mouse move to a surface position inside `CONTAINER`.
pub fn mouse_move_to(x: f64, y: f64) -> MarkerInput {
    let (cx, cy) = client_at(x, y);
    MarkerInput::Pointer(PointerEvent::mouse_move(cx, cy))
}

/// Single-finger touch move to a surface position inside `CONTAINER`.
pub fn touch_move_to(x: f64, y: f64) -> MarkerInput {
    MarkerInput::Pointer(PointerEvent::touch_move(&[client_at(x, y)]))
}

pub fn mouse_up() -> MarkerInput {
    MarkerInput::Pointer(PointerEvent::MouseUp)
}

// ============================================================================
// TestLayoutBuilder - Builder pattern for zone layouts
// ============================================================================

/// Builder for zone layouts.
///
/// # Example
/// ```ignore
/// let layout = TestLayoutBuilder::new()
///     .with_grid(2, 2)
///     .with_zone("urgent", 0, 0)
///     .build();
/// ```
#[derive(Default)]
pub struct TestLayoutBuilder {
    grid: Option<GridConfig>,
    zones: Vec<ZoneConfig>,
}

impl TestLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.grid = Some(GridConfig::new(rows, cols));
        self
    }

    pub fn with_zone(mut self, id: &str, row: u32, col: u32) -> Self {
        self.zones.push(ZoneConfig::new(id, row, col));
        self
    }

    /// 2x2 grid with top-left, top-right, bottom-left, bottom-right.
    pub fn quadrants() -> Self {
        Self::new()
            .with_grid(2, 2)
            .with_zone("top-left", 0, 0)
            .with_zone("top-right", 0, 1)
            .with_zone("bottom-left", 1, 0)
            .with_zone("bottom-right", 1, 1)
    }

    pub fn zones(&self) -> &[ZoneConfig] {
        &self.zones
    }

    pub fn build(self) -> ZoneLayout {
        ZoneLayout::new(self.grid, self.zones).expect("test layout should be valid")
    }
}

// ============================================================================
// MarkerStore - the caller's side of the data-down/events-up contract
// ============================================================================

/// Holds marker state the way an application store would and records every
/// callback it receives.
#[derive(Debug, Default)]
pub struct MarkerStore {
    pub state: MarkerState,
    pub positions: Vec<Position>,
    pub zone_changes: Vec<(String, Option<String>)>,
    pub clicks: usize,
    pub drag_starts: usize,
    pub drag_ends: usize,
    pub tooltip: Option<(bool, Option<AnchorPoint>)>,
}

impl MarkerStore {
    pub fn new(state: MarkerState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    /// Dispatch events as callbacks, which also updates the stored state.
    pub fn apply(&mut self, events: &[MarkerEvent]) {
        matrix_canvas::marker::dispatch_all(events, self);
    }
}

impl MarkerHandler for MarkerStore {
    fn on_position_change(&mut self, position: Position) {
        self.state.position = Some(position);
        self.positions.push(position);
    }

    fn on_zone_change(&mut self, new_zone: &str, old_zone: Option<&str>) {
        self.state.zone_id = Some(new_zone.to_string());
        self.zone_changes
            .push((new_zone.to_string(), old_zone.map(str::to_string)));
    }

    fn on_drag_start(&mut self) {
        self.drag_starts += 1;
    }

    fn on_drag_end(&mut self) {
        self.drag_ends += 1;
    }

    fn on_click(&mut self) {
        self.clicks += 1;
    }

    fn on_tooltip_change(&mut self, visible: bool, anchor: Option<AnchorPoint>) {
        self.tooltip = Some((visible, anchor));
    }
}
