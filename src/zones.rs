//! Zone Resolver
//!
//! Maps surface positions to zones and computes deterministic default
//! placements inside a zone. Lookups are plain arithmetic on the uniform grid
//! followed by a first-match scan in caller order, so a duplicated cell
//! address resolves to whichever zone was supplied first.

use crate::constants::{DEFAULT_PLACEMENT_PATTERN, DEFAULT_PLACEMENT_SPACING};
use crate::error::{CanvasError, Result};
use crate::input::coords::{clamp, clamp_position};
use crate::profile_scope;
use crate::types::{CellAddress, GridConfig, Position, ZoneConfig};
use std::collections::HashSet;
use tracing::warn;

/// Cell containing `position`. Points on a divider belong to the higher cell.
/// `None` for a grid with a zero dimension.
#[inline]
pub fn cell_at(position: Position, grid: GridConfig) -> Option<CellAddress> {
    if grid.rows == 0 || grid.cols == 0 {
        return None;
    }
    let p = clamp_position(position);
    let col = ((p.x / grid.cell_width()).floor() as u32).min(grid.cols - 1);
    let row = ((p.y / grid.cell_height()).floor() as u32).min(grid.rows - 1);
    Some(CellAddress::new(row, col))
}

/// Resolve the zone id at `position`, or `None` for a free canvas, an empty
/// zone set, or an unoccupied cell.
pub fn zone_from_position<'a>(
    position: Position,
    zones: &'a [ZoneConfig],
    grid: Option<GridConfig>,
) -> Option<&'a str> {
    profile_scope!("zone_from_position");

    let grid = grid?;
    if zones.is_empty() {
        return None;
    }

    let cell = cell_at(position, grid)?;
    zones
        .iter()
        .find(|zone| zone.cell == cell)
        .map(|zone| zone.id.as_str())
}

/// Default position for the `index`-th marker placed in `zone_id`.
///
/// Slots follow a 3x3 pattern around the cell center, `DEFAULT_PLACEMENT_SPACING`
/// apart, repeating every 9 indices. Unknown zones and free canvases fall back
/// to the surface center.
pub fn default_position_for_zone(
    zone_id: &str,
    zones: &[ZoneConfig],
    grid: Option<GridConfig>,
    index: usize,
) -> Position {
    let Some(grid) = grid.filter(|g| g.rows > 0 && g.cols > 0) else {
        return Position::center();
    };
    let Some(zone) = zones.iter().find(|zone| zone.id == zone_id) else {
        return Position::center();
    };

    let cell_width = grid.cell_width();
    let cell_height = grid.cell_height();
    let center_x = f64::from(zone.cell.col) * cell_width + cell_width / 2.0;
    let center_y = f64::from(zone.cell.row) * cell_height + cell_height / 2.0;

    let (dx, dy) = placement_offset(index);

    Position::new(
        clamp(center_x + dx, 0.0, 100.0),
        clamp(center_y + dy, 0.0, 100.0),
    )
}

/// Offset of placement slot `index` from the cell center.
#[inline]
fn placement_offset(index: usize) -> (f64, f64) {
    let n = DEFAULT_PLACEMENT_PATTERN;
    let col = (index % n) as f64 - 1.0;
    let row = ((index / n) % n) as f64 - 1.0;
    (col * DEFAULT_PLACEMENT_SPACING, row * DEFAULT_PLACEMENT_SPACING)
}

/// Bounds of a cell in surface percent: `(min_x, min_y, max_x, max_y)`.
pub fn cell_bounds(cell: CellAddress, grid: GridConfig) -> (f64, f64, f64, f64) {
    let w = grid.cell_width();
    let h = grid.cell_height();
    let min_x = f64::from(cell.col) * w;
    let min_y = f64::from(cell.row) * h;
    (min_x, min_y, min_x + w, min_y + h)
}

/// Validated, immutable grid and zone set for one canvas.
///
/// Replaced wholesale when the caller's zone set changes, never edited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoneLayout {
    grid: Option<GridConfig>,
    zones: Vec<ZoneConfig>,
}

impl ZoneLayout {
    /// Build a layout, computing the grid from the zones when none is given.
    pub fn new(grid: Option<GridConfig>, zones: Vec<ZoneConfig>) -> Result<Self> {
        let grid = match grid {
            Some(grid) => Some(grid),
            None => Self::computed_grid(&zones),
        };

        if let Some(grid) = grid {
            if grid.rows == 0 || grid.cols == 0 {
                return Err(CanvasError::InvalidGrid {
                    rows: grid.rows,
                    cols: grid.cols,
                });
            }
        }

        let mut ids = HashSet::with_capacity(zones.len());
        let mut cells = HashSet::with_capacity(zones.len());
        for zone in &zones {
            if !ids.insert(zone.id.as_str()) {
                return Err(CanvasError::DuplicateZoneId(zone.id.clone()));
            }
            if let Some(grid) = grid {
                if !grid.contains(zone.cell) {
                    return Err(CanvasError::ZoneOutOfBounds {
                        zone_id: zone.id.clone(),
                        row: zone.cell.row,
                        col: zone.cell.col,
                        rows: grid.rows,
                        cols: grid.cols,
                    });
                }
            }
            if !cells.insert(zone.cell) {
                warn!(
                    zone_id = %zone.id,
                    row = zone.cell.row,
                    col = zone.cell.col,
                    "Zone shares a cell with an earlier zone; the earlier zone wins lookups"
                );
            }
        }

        Ok(Self { grid, zones })
    }

    /// A free canvas: no grid, no zones.
    pub fn free() -> Self {
        Self::default()
    }

    /// Grid implied by a zone set: one past the largest row and column.
    pub fn computed_grid(zones: &[ZoneConfig]) -> Option<GridConfig> {
        let rows = zones.iter().map(|z| z.cell.row).max()?;
        let cols = zones.iter().map(|z| z.cell.col).max()?;
        Some(GridConfig::new(rows + 1, cols + 1))
    }

    pub fn grid(&self) -> Option<GridConfig> {
        self.grid
    }

    pub fn zones(&self) -> &[ZoneConfig] {
        &self.zones
    }

    pub fn zone(&self, zone_id: &str) -> Option<&ZoneConfig> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    pub fn zone_from_position(&self, position: Position) -> Option<&str> {
        zone_from_position(position, &self.zones, self.grid)
    }

    pub fn default_position(&self, zone_id: &str, index: usize) -> Position {
        default_position_for_zone(zone_id, &self.zones, self.grid, index)
    }

    /// Surface bounds of a zone's cell.
    pub fn zone_bounds(&self, zone_id: &str) -> Option<(f64, f64, f64, f64)> {
        let grid = self.grid?;
        self.zone(zone_id).map(|z| cell_bounds(z.cell, grid))
    }

    /// Zones sorted by (row, col), the order a renderer lays grid cells out in.
    pub fn zones_in_render_order(&self) -> Vec<&ZoneConfig> {
        let mut sorted: Vec<&ZoneConfig> = self.zones.iter().collect();
        sorted.sort_by_key(|z| z.cell);
        sorted
    }
}
