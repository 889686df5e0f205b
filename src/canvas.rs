//! Canvas - owns the shared context and handles background clicks/taps.
//!
//! Markers are created through the canvas so they all share its context and
//! listener bus. Clicks on the bare surface are converted to a position and
//! zone; clicks on markers, tooltips or buttons belong to those elements.

use crate::constants::SLOW_INPUT_BUDGET;
use crate::context::CanvasContext;
use crate::error::Result;
use crate::input::coords::CoordinateConverter;
use crate::input::{ClickTarget, GlobalListeners, NoopListeners, TouchPoint};
use crate::marker::{MarkerController, MarkerSettings};
use crate::perf::timed;
use crate::settings::CanvasSettings;
use crate::types::{Position, Rect};
use crate::zones::ZoneLayout;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// A click or tap delivered to the canvas element.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasClickEvent {
    Click {
        client_x: f64,
        client_y: f64,
        target: ClickTarget,
        container: Option<Rect>,
    },
    TouchEnd {
        changed_touches: Vec<TouchPoint>,
        target: ClickTarget,
        container: Option<Rect>,
    },
}

impl CanvasClickEvent {
    fn target(&self) -> ClickTarget {
        match self {
            Self::Click { target, .. } | Self::TouchEnd { target, .. } => *target,
        }
    }

    fn container(&self) -> Option<Rect> {
        match self {
            Self::Click { container, .. } | Self::TouchEnd { container, .. } => *container,
        }
    }
}

/// A background click resolved to the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasClick {
    pub position: Position,
    pub zone_id: Option<String>,
}

pub struct Canvas {
    context: CanvasContext,
    listeners: Arc<dyn GlobalListeners>,
    marker_settings: MarkerSettings,
}

impl Canvas {
    pub fn new(
        layout: ZoneLayout,
        drag_end_click_delay: Duration,
        listeners: Arc<dyn GlobalListeners>,
        marker_settings: MarkerSettings,
    ) -> Self {
        Self {
            context: CanvasContext::new(layout, drag_end_click_delay),
            listeners,
            marker_settings,
        }
    }

    /// Build a canvas from validated settings.
    pub fn from_settings(
        settings: &CanvasSettings,
        listeners: Arc<dyn GlobalListeners>,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self::new(
            settings.build_layout()?,
            settings.drag_end_click_delay(),
            listeners,
            settings.marker_settings(),
        ))
    }

    /// A free canvas with default settings and no listener bus.
    pub fn free() -> Self {
        Self::new(
            ZoneLayout::free(),
            Duration::ZERO,
            Arc::new(NoopListeners),
            MarkerSettings::default(),
        )
    }

    pub fn context(&self) -> &CanvasContext {
        &self.context
    }

    pub fn layout(&self) -> Arc<ZoneLayout> {
        self.context.layout()
    }

    pub fn replace_layout(&self, layout: ZoneLayout) {
        self.context.replace_layout(layout);
    }

    /// Create a marker bound to this canvas.
    pub fn marker(&self, id: impl Into<String>) -> MarkerController {
        MarkerController::new(
            id,
            self.context.clone(),
            self.listeners.clone(),
            self.marker_settings,
        )
    }

    /// Resolve a background click/tap, or `None` if it should be ignored.
    pub fn process_click(&self, event: &CanvasClickEvent, now: Instant) -> Option<CanvasClick> {
        if self.context.is_recent_drag_end(now) {
            debug!("Canvas click ignored: too soon after drag end");
            return None;
        }
        if event.target().is_interactive() {
            return None;
        }

        let (client_x, client_y) = match event {
            CanvasClickEvent::Click {
                client_x, client_y, ..
            } => (*client_x, *client_y),
            CanvasClickEvent::TouchEnd { changed_touches, .. } => {
                // Multi-finger releases are not taps
                let [touch] = changed_touches.as_slice() else {
                    return None;
                };
                (touch.client_x, touch.client_y)
            }
        };

        let Some(container) = event.container() else {
            debug!("Canvas click ignored: no container geometry");
            return None;
        };
        let Some(position) = CoordinateConverter::client_to_surface(client_x, client_y, &container)
        else {
            debug!(client_x, client_y, "Canvas click ignored: unusable geometry");
            return None;
        };

        let zone_id = timed("canvas_click_zone", SLOW_INPUT_BUDGET, || {
            self.context.zone_from_position(position)
        });
        Some(CanvasClick { position, zone_id })
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::free()
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("context", &self.context)
            .field("marker_settings", &self.marker_settings)
            .finish()
    }
}
