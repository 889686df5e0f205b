//! Tests for tooltip show/hide debouncing.

use crate::helpers::ms;
use matrix_canvas::types::AnchorPoint;
use matrix_canvas::tooltip::TooltipTransition;
use matrix_canvas::{Rect, TooltipSettings, TooltipTimer};
use std::time::Instant;

const ELEMENT: Rect = Rect::new(100.0, 200.0, 40.0, 40.0);

#[test]
fn test_show_immediately_with_zero_delay() {
    let mut timer = TooltipTimer::default();
    let shown = timer.request_show(Instant::now(), &ELEMENT);
    assert_eq!(
        shown,
        Some(TooltipTransition::Shown(Some(AnchorPoint { top: 200.0, left: 120.0 })))
    );
    assert!(timer.is_visible());
}

#[test]
fn test_hide_is_deferred() {
    let mut timer = TooltipTimer::default();
    let t = Instant::now();
    timer.request_show(t, &ELEMENT);
    timer.request_hide(t);

    assert!(timer.is_visible());
    assert_eq!(timer.next_deadline(), Some(t + ms(200)));
    assert_eq!(timer.tick(t + ms(199), &ELEMENT), None);
    assert_eq!(timer.tick(t + ms(200), &ELEMENT), Some(TooltipTransition::Hidden));
    assert!(!timer.is_visible());
}

#[test]
fn test_zero_hide_delay_still_waits_for_tick() {
    let mut timer = TooltipTimer::new(TooltipSettings::from_millis(0, 0));
    let t = Instant::now();
    timer.request_show(t, &ELEMENT);
    timer.request_hide(t);
    assert!(timer.is_visible());
    assert_eq!(timer.tick(t, &ELEMENT), Some(TooltipTransition::Hidden));
}

#[test]
fn test_show_cancels_pending_hide() {
    let mut timer = TooltipTimer::default();
    let t = Instant::now();

    timer.request_show(t, &ELEMENT);
    timer.request_hide(t + ms(10));
    // Pointer moves from marker onto the tooltip inside the hide window
    timer.request_show(t + ms(50), &ELEMENT);

    assert!(!timer.hide_pending());
    assert_eq!(timer.tick(t + ms(1000), &ELEMENT), None);
    assert!(timer.is_visible());
}

#[test]
fn test_hide_cancels_pending_show() {
    let mut timer = TooltipTimer::new(TooltipSettings::from_millis(100, 200));
    let t = Instant::now();

    assert_eq!(timer.request_show(t, &ELEMENT), None);
    assert!(timer.show_pending());
    timer.request_hide(t + ms(20));

    assert_eq!(timer.tick(t + ms(150), &ELEMENT), None);
    assert_eq!(timer.tick(t + ms(220), &ELEMENT), Some(TooltipTransition::Hidden));
    assert!(!timer.is_visible());
}

#[test]
fn test_delayed_show_measures_anchor_when_fired() {
    let mut timer = TooltipTimer::new(TooltipSettings::from_millis(100, 200));
    let t = Instant::now();
    timer.request_show(t, &ELEMENT);

    let moved = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(
        timer.tick(t + ms(100), &moved),
        Some(TooltipTransition::Shown(Some(AnchorPoint { top: 0.0, left: 5.0 })))
    );
}

#[test]
fn test_missing_rect_keeps_previous_anchor() {
    let mut timer = TooltipTimer::default();
    let t = Instant::now();
    timer.request_show(t, &ELEMENT);
    let anchor = timer.anchor();

    timer.request_hide(t);
    timer.tick(t + ms(200), &ELEMENT);
    let shown = timer.request_show(t + ms(300), &|| -> Option<Rect> { None });
    assert_eq!(shown, Some(TooltipTransition::Shown(anchor)));
}

#[test]
fn test_cancel_all_drops_pending() {
    let mut timer = TooltipTimer::default();
    let t = Instant::now();
    timer.request_show(t, &ELEMENT);
    timer.request_hide(t);
    timer.cancel_all();
    assert_eq!(timer.next_deadline(), None);
    assert_eq!(timer.tick(t + ms(500), &ELEMENT), None);
}
