//! Unit tests for drag clamping and resize geometry.

use homelab_panels::input::constraints::{
    DragStep, clamp_to_bounds, clamp_to_context, drag_position, pin_axis, resize_geometry,
};
use homelab_panels::input::coords::CoordinateContext;
use homelab_panels::{Axis, Direction, PanelGeometry, Point, Rect, Size, SizeLimits};

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn step(pointer: Point, bounds: Option<Rect>, axis: Axis) -> DragStep {
    DragStep {
        pointer,
        grab_offset: Point::new(20.0, 10.0),
        panel_size: Size::new(120.0, 80.0),
        context: CoordinateContext::resolve(None, Size::new(1024.0, 768.0)),
        bounds,
        axis,
        pinned: Point::new(40.0, 60.0),
    }
}

fn pointer_sweep() -> impl Iterator<Item = Point> {
    (-4..=14).flat_map(|i| (-4..=14).map(move |j| Point::new(i as f32 * 75.0, j as f32 * 60.0)))
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_stays_inside_bounds_for_any_pointer() {
    let bounds = Rect::new(100.0, 50.0, 600.0, 400.0);
    for pointer in pointer_sweep() {
        let pos = drag_position(&step(pointer, Some(bounds), Axis::Both));
        let panel = Rect::new(pos.x, pos.y, 120.0, 80.0);
        assert!(
            bounds.contains_rect(&panel),
            "pointer {:?} put panel at {:?} outside {:?}",
            pointer,
            panel,
            bounds
        );
    }
}

#[test]
fn test_drag_stays_inside_context_without_bounds() {
    for pointer in pointer_sweep() {
        let pos = drag_position(&step(pointer, None, Axis::Both));
        assert!(pos.x >= 0.0 && pos.x <= 1024.0 - 120.0);
        assert!(pos.y >= 0.0 && pos.y <= 768.0 - 80.0);
    }
}

#[test]
fn test_axis_lock_pins_other_coordinate() {
    for pointer in pointer_sweep() {
        assert_eq!(drag_position(&step(pointer, None, Axis::X)).y, 60.0);
        assert_eq!(drag_position(&step(pointer, None, Axis::Y)).x, 40.0);
    }
}

#[test]
fn test_unconstrained_move_follows_pointer() {
    let pos = drag_position(&step(Point::new(320.0, 210.0), None, Axis::Both));
    assert_eq!(pos, Point::new(300.0, 200.0));
}

#[test]
fn test_bounds_smaller_than_panel_pin_to_top_left() {
    let bounds = Rect::new(10.0, 10.0, 50.0, 50.0);
    let pos = clamp_to_bounds(Point::new(400.0, 400.0), Size::new(120.0, 80.0), &bounds, Axis::Both);
    assert_eq!(pos, Point::new(10.0, 10.0));
}

#[test]
fn test_context_clamp_respects_axis() {
    let limit = Size::new(500.0, 400.0);
    let panel = Size::new(100.0, 100.0);
    let pos = clamp_to_context(Point::new(-50.0, 900.0), panel, limit, Axis::X);
    assert_eq!(pos, Point::new(0.0, 900.0));
    let pos = clamp_to_context(Point::new(-50.0, 900.0), panel, limit, Axis::Y);
    assert_eq!(pos, Point::new(-50.0, 300.0));
}

#[test]
fn test_pin_axis_both_is_identity() {
    let candidate = Point::new(7.0, 9.0);
    assert_eq!(pin_axis(candidate, Point::ZERO, Axis::Both), candidate);
}

#[test]
fn test_offset_context_converts_to_local() {
    let mut s = step(Point::new(520.0, 310.0), None, Axis::Both);
    s.context = CoordinateContext {
        origin: Point::new(200.0, 100.0),
        limit: Size::new(600.0, 500.0),
    };
    assert_eq!(drag_position(&s), Point::new(300.0, 200.0));
}

// ============================================================================
// Resize
// ============================================================================

fn start() -> PanelGeometry {
    PanelGeometry {
        width: 300.0,
        height: 200.0,
        left: 100.0,
        top: 100.0,
    }
}

fn limits() -> SizeLimits {
    SizeLimits {
        min_width: 200.0,
        max_width: 400.0,
        min_height: 150.0,
        max_height: 260.0,
    }
}

fn delta_sweep() -> impl Iterator<Item = Point> {
    (-10..=10).flat_map(|i| (-10..=10).map(move |j| Point::new(i as f32 * 37.0, j as f32 * 29.0)))
}

#[test]
fn test_resize_always_within_limits() {
    let limits = limits();
    for direction in Direction::ALL {
        for delta in delta_sweep() {
            let next = resize_geometry(direction, start(), delta, &limits);
            assert!(
                limits.contains(next.size()),
                "{} with delta {:?} gave {:?}",
                direction,
                delta,
                next
            );
        }
    }
}

#[test]
fn test_resize_keeps_opposite_edges_fixed() {
    let start = start();
    for direction in Direction::ALL {
        for delta in delta_sweep() {
            let next = resize_geometry(direction, start, delta, &limits());
            if direction.has_west() {
                assert!(approx_eq(next.left + next.width, start.left + start.width));
            } else {
                assert_eq!(next.left, start.left);
            }
            if direction.has_north() {
                assert!(approx_eq(next.top + next.height, start.top + start.height));
            } else {
                assert_eq!(next.top, start.top);
            }
        }
    }
}

#[test]
fn test_edge_handles_change_one_dimension() {
    let delta = Point::new(50.0, 40.0);
    let next = resize_geometry(Direction::E, start(), delta, &limits());
    assert_eq!(next.height, 200.0);
    assert_eq!(next.width, 350.0);

    let next = resize_geometry(Direction::S, start(), delta, &limits());
    assert_eq!(next.width, 300.0);
    assert_eq!(next.height, 240.0);
}

#[test]
fn test_east_clamps_to_min_width() {
    let limits = SizeLimits {
        min_width: 200.0,
        max_width: 400.0,
        ..SizeLimits::default()
    };
    let next = resize_geometry(Direction::E, start(), Point::new(-500.0, 0.0), &limits);
    assert_eq!(next.width, 200.0);
    assert_eq!(next.left, 100.0);
}

#[test]
fn test_north_west_moves_origin() {
    let next = resize_geometry(
        Direction::NW,
        start(),
        Point::new(-50.0, -30.0),
        &SizeLimits::default(),
    );
    assert_eq!(next.width, 350.0);
    assert_eq!(next.height, 230.0);
    assert_eq!(next.left, 50.0);
    assert_eq!(next.top, 70.0);
}

#[test]
fn test_west_clamped_at_max_stops_moving() {
    let next = resize_geometry(Direction::W, start(), Point::new(-300.0, 0.0), &limits());
    assert_eq!(next.width, 400.0);
    assert_eq!(next.left, 0.0);
}

#[test]
fn test_default_limits() {
    let limits = SizeLimits::default();
    assert_eq!(limits.min_width, 200.0);
    assert_eq!(limits.min_height, 150.0);
    assert!(limits.max_width.is_infinite());
    assert!(limits.max_height.is_infinite());
}

#[test]
fn test_unbounded_limits_never_clamp() {
    let next = resize_geometry(
        Direction::SE,
        start(),
        Point::new(-250.0, 5000.0),
        &SizeLimits::UNBOUNDED,
    );
    assert_eq!(next.width, 50.0);
    assert_eq!(next.height, 5200.0);
}
