//! Snapshot tests using the insta crate.
//!
//! The serialised forms here are what hosts forward as custom event payloads
//! or persist as panel configuration, so changes to them are breaking.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use homelab_panels::{
    Axis, BoundsTarget, Direction, DragConfig, HandleSpec, PanelEvent, Point, ResizeConfig,
};

// ============================================================================
// PanelEvent
// ============================================================================

#[test]
fn snapshot_dragged_event() {
    let event = PanelEvent::Dragged { x: 212.5, y: 40.25 };
    assert_eq!(event.name(), "dragged");
    insta::assert_json_snapshot!(event, @r#"
    {
      "type": "dragged",
      "x": 212.5,
      "y": 40.25
    }
    "#);
}

#[test]
fn snapshot_resized_event() {
    let event = PanelEvent::Resized {
        width: 350.5,
        height: 230.5,
        left: 49.5,
        top: 69.5,
    };
    assert_eq!(event.name(), "resized");
    insta::assert_json_snapshot!(event, @r#"
    {
      "type": "resized",
      "width": 350.5,
      "height": 230.5,
      "left": 49.5,
      "top": 69.5
    }
    "#);
}

#[test]
fn test_event_parses_from_host_payload() {
    let event: PanelEvent =
        serde_json::from_str(r#"{"type": "resized", "width": 1, "height": 2, "left": 3, "top": 4}"#)
            .unwrap();
    assert_eq!(
        event,
        PanelEvent::Resized {
            width: 1.0,
            height: 2.0,
            left: 3.0,
            top: 4.0
        }
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn snapshot_drag_config() {
    let config = DragConfig {
        handle_selector: Some(".title-bar".to_string()),
        initial_position: Some(Point::new(12.5, 24.5)),
        bounds: Some(BoundsTarget::Selector("#rack".to_string())),
        axis: Axis::X,
    };
    insta::assert_json_snapshot!(config, @r##"
    {
      "handle_selector": ".title-bar",
      "initial_position": {
        "x": 12.5,
        "y": 24.5
      },
      "bounds": "#rack",
      "axis": "x"
    }
    "##);
}

#[test]
fn snapshot_default_drag_config() {
    insta::assert_json_snapshot!(DragConfig::default(), @r#"
    {
      "handle_selector": null,
      "initial_position": null,
      "bounds": null,
      "axis": "both"
    }
    "#);
}

#[test]
fn snapshot_resize_config() {
    let config = ResizeConfig {
        min_width: 240.5,
        min_height: 180.5,
        max_width: Some(640.5),
        max_height: None,
        disabled: true,
    };
    insta::assert_json_snapshot!(config, @r#"
    {
      "min_width": 240.5,
      "min_height": 180.5,
      "max_width": 640.5,
      "max_height": null,
      "disabled": true
    }
    "#);
}

#[test]
fn test_handle_spec_serialises_tags() {
    let spec = HandleSpec::for_direction(Direction::SW);
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["direction"], "sw");
    assert_eq!(json["cursor"], "nesw-resize");
    assert_eq!(json["class_name"], "resize-handle resize-sw");
}
