//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the settings wire format and the event trace of a
//! typical drag. To update after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{MarkerStore, TestLayoutBuilder, mouse_down, mouse_move_to, mouse_up, ms};
use matrix_canvas::{
    CanvasContext, CanvasSettings, GridConfig, MarkerController, MarkerEvent, MarkerState,
    ZoneConfig,
};
use std::time::{Duration, Instant};

/// One line per event, positions rounded for stable output.
fn trace(events: &[MarkerEvent]) -> String {
    events
        .iter()
        .map(|event| match event {
            MarkerEvent::PositionChanged(p) => format!("position {:.1} {:.1}", p.x, p.y),
            MarkerEvent::ZoneChanged { new, old } => {
                format!("zone {} <- {}", new, old.as_deref().unwrap_or("none"))
            }
            MarkerEvent::DragStarted => "drag start".to_string(),
            MarkerEvent::DragEnded => "drag end".to_string(),
            MarkerEvent::Clicked => "click".to_string(),
            MarkerEvent::TooltipShown(_) => "tooltip shown".to_string(),
            MarkerEvent::TooltipHidden => "tooltip hidden".to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_zone_config() {
    let zone = ZoneConfig::new("do", 0, 1).with_label("Do first");
    insta::assert_json_snapshot!(zone, @r#"
    {
      "id": "do",
      "label": "Do first",
      "position": {
        "row": 0,
        "col": 1
      }
    }
    "#);
}

#[test]
fn snapshot_canvas_settings() {
    let settings = CanvasSettings {
        grid: Some(GridConfig::new(1, 2)),
        zones: vec![ZoneConfig::new("left", 0, 0), ZoneConfig::new("right", 0, 1)],
        ..Default::default()
    };
    insta::assert_json_snapshot!(settings, { ".keyboard_step" => "[step]" }, @r#"
    {
      "grid": {
        "rows": 1,
        "cols": 2
      },
      "zones": [
        {
          "id": "left",
          "position": {
            "row": 0,
            "col": 0
          }
        },
        {
          "id": "right",
          "position": {
            "row": 0,
            "col": 1
          }
        }
      ],
      "drag_end_click_delay_ms": 0,
      "marker_click_threshold_ms": 150,
      "tooltip_show_delay_ms": 0,
      "tooltip_hide_delay_ms": 200,
      "keyboard_step": "[step]"
    }
    "#);
}

#[test]
fn snapshot_drag_across_quadrants() {
    let ctx = CanvasContext::new(TestLayoutBuilder::quadrants().build(), Duration::ZERO);
    let mut marker = MarkerController::with_defaults("m", ctx);
    let mut store = MarkerStore::new(MarkerState::new("m").at(25.0, 25.0).in_zone("top-left"));
    let t = Instant::now();

    let mut events = Vec::new();
    for (input, at) in [
        (mouse_down(), ms(0)),
        (mouse_move_to(40.0, 25.0), ms(16)),
        (mouse_move_to(60.0, 25.0), ms(32)),
        (mouse_move_to(60.0, 70.0), ms(48)),
        (mouse_up(), ms(64)),
    ] {
        let batch = marker.process(&input, &store.state, t + at);
        store.apply(&batch);
        events.extend(batch);
    }

    insta::assert_snapshot!(trace(&events), @r"
    drag start
    position 40.0 25.0
    position 60.0 25.0
    zone top-right <- top-left
    position 60.0 70.0
    zone bottom-right <- top-right
    drag end
    ");
}
