//! Coordinate utilities for surface interactions.
//!
//! Clamping primitives plus the single client-to-surface conversion shared by
//! marker dragging and background clicks, so the percentage formula lives in
//! one place.

use crate::constants::{SURFACE_MAX, SURFACE_MIN};
use crate::types::{Position, Rect};

/// Clamp `value` into `[min, max]`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Clamp both axes of a position into the surface.
#[inline]
pub fn clamp_position(position: Position) -> Position {
    Position {
        x: clamp(position.x, SURFACE_MIN, SURFACE_MAX),
        y: clamp(position.y, SURFACE_MIN, SURFACE_MAX),
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a client-space point to a clamped surface position.
    ///
    /// Returns `None` when the container rect is unusable or the client
    /// coordinates are not finite; the caller drops the event.
    #[inline]
    pub fn client_to_surface(client_x: f64, client_y: f64, bounds: &Rect) -> Option<Position> {
        if !bounds.is_usable() || !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }

        let x = ((client_x - bounds.left) / bounds.width) * 100.0;
        let y = ((client_y - bounds.top) / bounds.height) * 100.0;
        let position = Position::new(x, y);

        // Huge client values can still overflow the division
        position.is_finite().then(|| clamp_position(position))
    }

    /// Convert a surface position back to client space (for renderers and tests).
    #[inline]
    pub fn surface_to_client(position: Position, bounds: &Rect) -> (f64, f64) {
        (
            bounds.left + position.x / 100.0 * bounds.width,
            bounds.top + position.y / 100.0 * bounds.height,
        )
    }
}
