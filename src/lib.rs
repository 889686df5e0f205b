//! Geometry and interaction engine for draggable markers on a normalized,
//! optionally zoned 2D surface.
//!
//! The surface spans 0-100 on both axes. A canvas may be split into a grid of
//! labeled zones; markers are dragged with mouse or touch, stepped with the
//! keyboard, and report position, zone changes, clicks and tooltip visibility
//! back to the caller. Rendering is left to the host: the engine consumes raw
//! input plus container geometry and returns events.
//!
//! ## Modules
//!
//! - `types` - Positions, rects, grid/zone config, caller-owned marker state
//! - `zones` - Zone lookup and default placement
//! - `input` - Coordinates, raw events, drag state machine, keyboard
//! - `tooltip` - Debounced tooltip show/hide timers
//! - `marker` - Per-marker coordinator (drag + keyboard + tooltip + clicks)
//! - `context` / `canvas` - Shared per-canvas state and background clicks
//! - `settings` / `logging` / `perf` - Configuration and instrumentation

pub mod canvas;
pub mod constants;
pub mod context;
pub mod error;
pub mod input;
pub mod logging;
pub mod marker;
pub mod perf;
pub mod settings;
pub mod tooltip;
pub mod types;
pub mod zones;

pub use canvas::{Canvas, CanvasClick, CanvasClickEvent};
pub use context::CanvasContext;
pub use error::{CanvasError, Result};
pub use input::coords::{clamp, clamp_position};
pub use marker::{MarkerController, MarkerEvent, MarkerHandler, MarkerInput, MarkerSettings};
pub use settings::CanvasSettings;
pub use tooltip::{TooltipSettings, TooltipTimer};
pub use types::{CellAddress, GridConfig, MarkerState, Position, Rect, ZoneConfig};
pub use zones::{ZoneLayout, default_position_for_zone, zone_from_position};
