//! Core types for the matrix canvas.
//!
//! This module defines the value types shared by every other module: surface
//! positions, viewport rectangles, tooltip anchors and the grid/zone
//! configuration supplied by the caller.

use crate::constants::{SURFACE_CENTER, Z_INDEX_DRAGGING, Z_INDEX_HOVERED, Z_INDEX_RESTING};
use serde::{Deserialize, Serialize};

// ============================================================================
// Surface Geometry
// ============================================================================

/// A point on the normalized surface, both axes in percent of the container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The middle of the surface, used whenever no better placement exists.
    pub const fn center() -> Self {
        Self::new(SURFACE_CENTER, SURFACE_CENTER)
    }

    /// Offset by a delta without clamping.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::center()
    }
}

/// A rectangle in viewport (client) pixels, as reported by the layout layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// True when the rect can serve as a coordinate frame: finite and non-empty.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Horizontal center of the top edge.
    pub fn top_center(&self) -> AnchorPoint {
        AnchorPoint {
            top: self.top,
            left: self.left + self.width / 2.0,
        }
    }
}

/// Viewport-space point a tooltip is positioned against.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub top: f64,
    pub left: f64,
}

// ============================================================================
// Grid & Zones
// ============================================================================

/// Uniform partition of the surface into `rows x cols` equal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
}

impl GridConfig {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Cell width in percent of the surface.
    #[inline]
    pub fn cell_width(&self) -> f64 {
        100.0 / f64::from(self.cols)
    }

    /// Cell height in percent of the surface.
    #[inline]
    pub fn cell_height(&self) -> f64 {
        100.0 / f64::from(self.rows)
    }

    pub fn contains(&self, cell: CellAddress) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }
}

/// Zero-based grid cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellAddress {
    pub row: u32,
    pub col: u32,
}

impl CellAddress {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A named region of the surface occupying one grid cell.
///
/// Label and colors are passed through to the renderer untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(rename = "position")]
    pub cell: CellAddress,
}

impl ZoneConfig {
    pub fn new(id: impl Into<String>, row: u32, col: u32) -> Self {
        Self {
            id: id.into(),
            label: None,
            background_color: None,
            label_color: None,
            cell: CellAddress::new(row, col),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_colors(
        mut self,
        background: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.background_color = Some(background.into());
        self.label_color = Some(label.into());
        self
    }
}

// ============================================================================
// Markers
// ============================================================================

/// Caller-owned marker state, handed to the core on every call.
///
/// The core never stores this between calls; it only proposes changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerState {
    pub id: String,
    /// Explicit position; when absent the marker sits at its zone default.
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

impl MarkerState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }

    pub fn in_zone(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Stacking layer of a marker, derived from its interaction state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MarkerLayer {
    Resting,
    Hovered,
    Dragging,
}

impl MarkerLayer {
    pub fn z_index(self) -> i32 {
        match self {
            Self::Resting => Z_INDEX_RESTING,
            Self::Hovered => Z_INDEX_HOVERED,
            Self::Dragging => Z_INDEX_DRAGGING,
        }
    }
}
