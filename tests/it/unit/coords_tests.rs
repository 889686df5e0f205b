//! Tests for clamping and client-to-surface conversion.

use crate::helpers::{CONTAINER, client_at};
use matrix_canvas::input::coords::CoordinateConverter;
use matrix_canvas::{Position, Rect, clamp, clamp_position};
use proptest::prelude::*;

#[test]
fn test_clamp_basic() {
    assert_eq!(clamp(-5.0, 0.0, 100.0), 0.0);
    assert_eq!(clamp(105.0, 0.0, 100.0), 100.0);
    assert_eq!(clamp(42.5, 0.0, 100.0), 42.5);
}

#[test]
fn test_client_to_surface_offsets_by_container_origin() {
    let (cx, cy) = client_at(25.0, 75.0);
    assert_eq!(
        CoordinateConverter::client_to_surface(cx, cy, &CONTAINER),
        Some(Position::new(25.0, 75.0))
    );
}

#[test]
fn test_client_to_surface_clamps_outside_points() {
    let outside = CoordinateConverter::client_to_surface(-1000.0, 5000.0, &CONTAINER);
    assert_eq!(outside, Some(Position::new(0.0, 100.0)));
}

#[test]
fn test_client_to_surface_rejects_bad_geometry() {
    let zero = Rect::new(0.0, 0.0, 0.0, 100.0);
    assert!(CoordinateConverter::client_to_surface(10.0, 10.0, &zero).is_none());
    assert!(CoordinateConverter::client_to_surface(f64::NAN, 10.0, &CONTAINER).is_none());
    assert!(CoordinateConverter::client_to_surface(10.0, f64::INFINITY, &CONTAINER).is_none());
}

proptest! {
    #[test]
    fn prop_clamp_stays_in_range(v in -1e9f64..1e9, lo in -100.0f64..0.0, span in 0.0f64..200.0) {
        let hi = lo + span;
        let c = clamp(v, lo, hi);
        prop_assert!(c >= lo && c <= hi);
    }

    #[test]
    fn prop_clamp_is_idempotent(v in -1e9f64..1e9) {
        let once = clamp(v, 0.0, 100.0);
        prop_assert_eq!(clamp(once, 0.0, 100.0), once);
    }

    #[test]
    fn prop_clamp_preserves_in_range_values(v in 0.0f64..=100.0) {
        prop_assert_eq!(clamp(v, 0.0, 100.0), v);
    }

    #[test]
    fn prop_clamp_position_in_surface(x in -1e6f64..1e6, y in -1e6f64..1e6) {
        let p = clamp_position(Position::new(x, y));
        prop_assert!((0.0..=100.0).contains(&p.x));
        prop_assert!((0.0..=100.0).contains(&p.y));
    }

    #[test]
    fn prop_conversion_in_surface(cx in -1e6f64..1e6, cy in -1e6f64..1e6) {
        let p = CoordinateConverter::client_to_surface(cx, cy, &CONTAINER).unwrap();
        prop_assert!((0.0..=100.0).contains(&p.x));
        prop_assert!((0.0..=100.0).contains(&p.y));
    }
}
