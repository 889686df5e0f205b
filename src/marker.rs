//! Interaction Coordinator - one per marker.
//!
//! Combines the drag engine, the tooltip timer and keyboard stepping into a
//! single position/zone change protocol. The caller owns marker state and
//! hands it in on every call; the controller only proposes changes as
//! [`MarkerEvent`]s, in the order the underlying input arrived.
//!
//! ## Click suppression
//!
//! A click is dropped when the preceding drag session moved, or when it lands
//! within the click threshold of the last drag end. That keeps the pointer-up
//! ending a drag from also counting as a click. Enter/Space activation is not
//! subject to suppression.

use crate::constants::{DRAG_END_CLICK_THRESHOLD_MS, KEYBOARD_STEP};
use crate::context::CanvasContext;
use crate::input::coords::clamp_position;
use crate::input::keyboard::{key_action, step_position};
use crate::input::{
    DragEngine, DragOutput, GlobalListeners, Key, KeyAction, NoopListeners, PointerEvent,
};
use crate::perf::InputTimer;
use crate::tooltip::{ElementBounds, TooltipSettings, TooltipTimer, TooltipTransition};
use crate::types::{AnchorPoint, MarkerLayer, MarkerState, Position, Rect};
use crate::zones::ZoneLayout;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Input accepted by a marker.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerInput {
    Pointer(PointerEvent),
    Key(Key),
    /// Discrete click/tap on the marker element
    Click,
    /// Pointer entered the marker; carries the marker's viewport rect
    PointerEnter { element: Option<Rect> },
    PointerLeave,
    /// Pointer entered the marker's tooltip; carries the marker's viewport rect
    TooltipEnter { element: Option<Rect> },
    TooltipLeave,
}

/// Change proposed to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerEvent {
    PositionChanged(Position),
    ZoneChanged { new: String, old: Option<String> },
    DragStarted,
    DragEnded,
    Clicked,
    TooltipShown(Option<AnchorPoint>),
    TooltipHidden,
}

/// Callback-style consumer of marker events. Every method defaults to a no-op.
pub trait MarkerHandler {
    fn on_position_change(&mut self, _position: Position) {}
    fn on_zone_change(&mut self, _new_zone: &str, _old_zone: Option<&str>) {}
    fn on_drag_start(&mut self) {}
    fn on_drag_end(&mut self) {}
    fn on_click(&mut self) {}
    /// Rendered visibility: a drag hides the tooltip and its end restores it.
    fn on_tooltip_change(&mut self, _visible: bool, _anchor: Option<AnchorPoint>) {}
}

impl MarkerEvent {
    pub fn dispatch<H: MarkerHandler + ?Sized>(&self, handler: &mut H) {
        match self {
            Self::PositionChanged(position) => handler.on_position_change(*position),
            Self::ZoneChanged { new, old } => handler.on_zone_change(new, old.as_deref()),
            Self::DragStarted => handler.on_drag_start(),
            Self::DragEnded => handler.on_drag_end(),
            Self::Clicked => handler.on_click(),
            Self::TooltipShown(anchor) => handler.on_tooltip_change(true, *anchor),
            Self::TooltipHidden => handler.on_tooltip_change(false, None),
        }
    }
}

/// Dispatch events to a handler in order.
pub fn dispatch_all<H: MarkerHandler + ?Sized>(events: &[MarkerEvent], handler: &mut H) {
    for event in events {
        event.dispatch(handler);
    }
}

/// Per-marker tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerSettings {
    pub keyboard_step: f64,
    pub click_threshold: Duration,
    pub tooltip: TooltipSettings,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            keyboard_step: KEYBOARD_STEP,
            click_threshold: Duration::from_millis(DRAG_END_CLICK_THRESHOLD_MS),
            tooltip: TooltipSettings::default(),
        }
    }
}

/// Where a marker sits: its explicit position, else its zone's first default
/// slot, else the surface center.
pub fn resolve_position(state: &MarkerState, layout: &ZoneLayout) -> Position {
    if let Some(position) = state.position {
        return position;
    }
    match &state.zone_id {
        Some(zone_id) => layout.default_position(zone_id, 0),
        None => Position::center(),
    }
}

/// Interaction state and glue for one marker.
pub struct MarkerController {
    id: String,
    context: CanvasContext,
    settings: MarkerSettings,
    drag: DragEngine,
    tooltip: TooltipTimer,
    hovered: bool,
}

impl MarkerController {
    pub fn new(
        id: impl Into<String>,
        context: CanvasContext,
        listeners: Arc<dyn GlobalListeners>,
        settings: MarkerSettings,
    ) -> Self {
        let id = id.into();
        Self {
            drag: DragEngine::new(id.clone(), listeners),
            tooltip: TooltipTimer::new(settings.tooltip),
            id,
            context,
            settings,
            hovered: false,
        }
    }

    /// Controller with default settings and no listener bus.
    pub fn with_defaults(id: impl Into<String>, context: CanvasContext) -> Self {
        Self::new(id, context, Arc::new(NoopListeners), MarkerSettings::default())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn settings(&self) -> &MarkerSettings {
        &self.settings
    }

    pub fn context(&self) -> &CanvasContext {
        &self.context
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Disabled markers stay rendered but leave the tab order.
    pub fn is_focusable(state: &MarkerState) -> bool {
        !state.disabled
    }

    /// Hover affordance applies only while not dragging.
    pub fn is_hover_styled(&self) -> bool {
        self.hovered && !self.is_dragging()
    }

    pub fn layer(&self) -> MarkerLayer {
        if self.is_dragging() {
            MarkerLayer::Dragging
        } else if self.hovered {
            MarkerLayer::Hovered
        } else {
            MarkerLayer::Resting
        }
    }

    /// Anchor to draw the tooltip at; `None` while hidden, while dragging, or
    /// before any anchor was measured.
    pub fn tooltip_anchor(&self) -> Option<AnchorPoint> {
        if self.tooltip.is_visible() && !self.is_dragging() {
            self.tooltip.anchor()
        } else {
            None
        }
    }

    pub fn tooltip(&self) -> &TooltipTimer {
        &self.tooltip
    }

    /// Current position for rendering.
    pub fn resolved_position(&self, state: &MarkerState) -> Position {
        resolve_position(state, &self.context.layout())
    }

    /// Whether the host should swallow the key's default action.
    pub fn handles_key(&self, key: &Key, state: &MarkerState) -> bool {
        !state.disabled && key_action(key, self.settings.keyboard_step).is_some()
    }

    /// True if a click at `now` should be ignored as the tail of a drag.
    pub fn should_suppress_click(&self, now: Instant) -> bool {
        self.drag.has_moved() || self.drag.ended_within(now, self.settings.click_threshold)
    }

    /// Process one input against the caller's current marker state.
    pub fn process(&mut self, input: &MarkerInput, state: &MarkerState, now: Instant) -> Vec<MarkerEvent> {
        let _timer = InputTimer::for_input("marker_process");
        self.drag.set_disabled(state.disabled);

        let mut events = Vec::new();
        match input {
            MarkerInput::Pointer(event) => {
                for output in self.drag.process(event, now) {
                    match output {
                        DragOutput::Started => {
                            self.context.set_dragging(true, now);
                            events.push(MarkerEvent::DragStarted);
                            if self.tooltip.is_visible() {
                                events.push(MarkerEvent::TooltipHidden);
                            }
                        }
                        DragOutput::Moved(position) => {
                            self.propose_position(position, state, &mut events);
                        }
                        DragOutput::Ended => self.finish_drag(now, &mut events),
                    }
                }
            }
            MarkerInput::Key(key) => self.handle_key(key, state, &mut events),
            MarkerInput::Click => {
                if self.should_suppress_click(now) {
                    debug!(marker = %self.id, "Click suppressed after drag");
                } else {
                    events.push(MarkerEvent::Clicked);
                }
            }
            MarkerInput::PointerEnter { element } => {
                self.hovered = true;
                self.show_tooltip(now, element, &mut events);
            }
            MarkerInput::PointerLeave => {
                self.hovered = false;
                self.tooltip.request_hide(now);
            }
            MarkerInput::TooltipEnter { element } => self.show_tooltip(now, element, &mut events),
            MarkerInput::TooltipLeave => self.tooltip.request_hide(now),
        }
        events
    }

    /// Fire due tooltip timers. `element` is the marker's current rect.
    pub fn tick(&mut self, now: Instant, element: &impl ElementBounds) -> Vec<MarkerEvent> {
        let mut events = Vec::new();
        if let Some(transition) = self.tooltip.tick(now, element) {
            self.push_tooltip(transition, &mut events);
        }
        events
    }

    /// End an active drag on the host's behalf. Returns `DragEnded` if a
    /// session was running.
    pub fn cancel_drag(&mut self, now: Instant) -> Vec<MarkerEvent> {
        let mut events = Vec::new();
        if self.drag.cancel(now) {
            self.finish_drag(now, &mut events);
        }
        events
    }

    /// Drag end bookkeeping; a tooltip hidden by the drag is reported again.
    fn finish_drag(&mut self, now: Instant, events: &mut Vec<MarkerEvent>) {
        self.context.set_dragging(false, now);
        events.push(MarkerEvent::DragEnded);
        if self.tooltip.is_visible() {
            events.push(MarkerEvent::TooltipShown(self.tooltip.anchor()));
        }
    }

    /// Report a tooltip transition unless a drag currently hides the tooltip.
    fn push_tooltip(&self, transition: TooltipTransition, events: &mut Vec<MarkerEvent>) {
        if self.is_dragging() {
            return;
        }
        events.push(transition_event(transition));
    }

    /// Cancel timers and release listeners (marker unmounted).
    pub fn dispose(&mut self) {
        self.tooltip.cancel_all();
        if self.drag.dispose() {
            self.context.abort_drag();
        }
        self.hovered = false;
    }

    fn handle_key(&mut self, key: &Key, state: &MarkerState, events: &mut Vec<MarkerEvent>) {
        if state.disabled {
            return;
        }
        match key_action(key, self.settings.keyboard_step) {
            Some(KeyAction::Step { dx, dy }) => {
                let current = self.resolved_position(state);
                if !current.is_finite() {
                    debug!(
                        marker = %self.id,
                        x = current.x,
                        y = current.y,
                        "Key step ignored: non-finite position"
                    );
                    return;
                }
                self.propose_position(step_position(current, dx, dy), state, events);
            }
            Some(KeyAction::Activate) => events.push(MarkerEvent::Clicked),
            None => {}
        }
    }

    fn show_tooltip(&mut self, now: Instant, element: &Option<Rect>, events: &mut Vec<MarkerEvent>) {
        let element = *element;
        if let Some(transition) = self.tooltip.request_show(now, &move || element) {
            self.push_tooltip(transition, events);
        }
    }

    /// Emit the clamped position, then a zone change if the position now
    /// resolves to a different zone than the caller last reported.
    fn propose_position(&self, position: Position, state: &MarkerState, events: &mut Vec<MarkerEvent>) {
        let position = clamp_position(position);
        events.push(MarkerEvent::PositionChanged(position));

        if let Some(new_zone) = self.context.zone_from_position(position) {
            if state.zone_id.as_deref() != Some(new_zone.as_str()) {
                debug!(
                    marker = %self.id,
                    new = %new_zone,
                    old = ?state.zone_id,
                    "Marker changed zone"
                );
                events.push(MarkerEvent::ZoneChanged {
                    new: new_zone,
                    old: state.zone_id.clone(),
                });
            }
        }
    }
}

fn transition_event(transition: TooltipTransition) -> MarkerEvent {
    match transition {
        TooltipTransition::Shown(anchor) => MarkerEvent::TooltipShown(anchor),
        TooltipTransition::Hidden => MarkerEvent::TooltipHidden,
    }
}

impl Drop for MarkerController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for MarkerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerController")
            .field("id", &self.id)
            .field("dragging", &self.is_dragging())
            .field("hovered", &self.hovered)
            .finish()
    }
}
