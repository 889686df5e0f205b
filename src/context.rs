//! Shared canvas context.
//!
//! One `CanvasContext` exists per canvas and is handed to every marker at
//! construction. It carries the zone layout and the canvas-wide drag flag so
//! markers never reach for ambient global state. Clones share the same data.

use crate::types::{GridConfig, Position, ZoneConfig};
use crate::zones::ZoneLayout;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug)]
struct ContextInner {
    layout: Arc<ZoneLayout>,
    dragging: bool,
    last_drag_end: Option<Instant>,
    drag_end_click_delay: Duration,
}

/// Cloneable handle to the per-canvas shared state.
#[derive(Clone, Debug)]
pub struct CanvasContext {
    inner: Arc<RwLock<ContextInner>>,
}

impl CanvasContext {
    pub fn new(layout: ZoneLayout, drag_end_click_delay: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ContextInner {
                layout: Arc::new(layout),
                dragging: false,
                last_drag_end: None,
                drag_end_click_delay,
            })),
        }
    }

    /// A free canvas with no zones and click suppression disabled.
    pub fn free() -> Self {
        Self::new(ZoneLayout::free(), Duration::ZERO)
    }

    /// Snapshot of the current layout. Cheap; holds no lock.
    pub fn layout(&self) -> Arc<ZoneLayout> {
        self.inner.read().layout.clone()
    }

    /// Swap in a new zone set wholesale.
    pub fn replace_layout(&self, layout: ZoneLayout) {
        debug!(
            zones = layout.zones().len(),
            grid = ?layout.grid(),
            "Canvas layout replaced"
        );
        self.inner.write().layout = Arc::new(layout);
    }

    pub fn grid(&self) -> Option<GridConfig> {
        self.inner.read().layout.grid()
    }

    pub fn zones(&self) -> Vec<ZoneConfig> {
        self.inner.read().layout.zones().to_vec()
    }

    pub fn zone_from_position(&self, position: Position) -> Option<String> {
        self.inner
            .read()
            .layout
            .zone_from_position(position)
            .map(str::to_owned)
    }

    pub fn default_position(&self, zone_id: &str, index: usize) -> Position {
        self.inner.read().layout.default_position(zone_id, index)
    }

    /// True while any marker on this canvas is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.inner.read().dragging
    }

    /// Set the canvas drag flag; clearing it records the drag end time.
    pub fn set_dragging(&self, dragging: bool, now: Instant) {
        let mut inner = self.inner.write();
        inner.dragging = dragging;
        if !dragging {
            inner.last_drag_end = Some(now);
        }
    }

    /// Clear the drag flag without recording an end (dragged marker unmounted).
    pub fn abort_drag(&self) {
        self.inner.write().dragging = false;
    }

    pub fn last_drag_end(&self) -> Option<Instant> {
        self.inner.read().last_drag_end
    }

    pub fn drag_end_click_delay(&self) -> Duration {
        self.inner.read().drag_end_click_delay
    }

    pub fn set_drag_end_click_delay(&self, delay: Duration) {
        self.inner.write().drag_end_click_delay = delay;
    }

    /// True if a background click at `now` follows a drag end too closely.
    /// Always false while the delay is zero.
    pub fn is_recent_drag_end(&self, now: Instant) -> bool {
        let inner = self.inner.read();
        if inner.drag_end_click_delay.is_zero() {
            return false;
        }
        inner
            .last_drag_end
            .is_some_and(|end| now.saturating_duration_since(end) < inner.drag_end_click_delay)
    }
}

impl Default for CanvasContext {
    fn default() -> Self {
        Self::free()
    }
}
