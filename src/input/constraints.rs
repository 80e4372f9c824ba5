//! Pure constraint math for drag and resize sessions.
//!
//! Nothing here touches a host; every function maps start state plus pointer
//! input to the geometry that should be applied.

use crate::constants::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::types::{Axis, Direction, PanelGeometry, Point, Rect, Size};

/// `max(lo, min(value, hi))`. Yields `lo` when the range is inverted, so a
/// boundary smaller than the panel pins it to the boundary's top-left.
#[inline]
fn clamp_range(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

// ============================================================================
// Drag
// ============================================================================

/// Clamp a proposed screen-space top-left so the panel stays within `bounds`
/// on every axis `axis` allows.
pub fn clamp_to_bounds(proposed: Point, panel: Size, bounds: &Rect, axis: Axis) -> Point {
    let mut out = proposed;
    if axis.allows_x() {
        out.x = clamp_range(proposed.x, bounds.left(), bounds.right() - panel.width);
    }
    if axis.allows_y() {
        out.y = clamp_range(proposed.y, bounds.top(), bounds.bottom() - panel.height);
    }
    out
}

/// Clamp a proposed context-relative top-left to `[0, limit - panel]`.
pub fn clamp_to_context(proposed: Point, panel: Size, limit: Size, axis: Axis) -> Point {
    let mut out = proposed;
    if axis.allows_x() {
        out.x = clamp_range(proposed.x, 0.0, limit.width - panel.width);
    }
    if axis.allows_y() {
        out.y = clamp_range(proposed.y, 0.0, limit.height - panel.height);
    }
    out
}

/// Replace the locked coordinate with its pinned value.
pub fn pin_axis(candidate: Point, pinned: Point, axis: Axis) -> Point {
    match axis {
        Axis::X => Point::new(candidate.x, pinned.y),
        Axis::Y => Point::new(pinned.x, candidate.y),
        Axis::Both => candidate,
    }
}

/// Inputs for a single drag move.
#[derive(Debug, Clone, Copy)]
pub struct DragStep {
    /// Current pointer position (screen)
    pub pointer: Point,
    /// Pointer offset from the panel's top-left at grab time
    pub grab_offset: Point,
    pub panel_size: Size,
    pub context: CoordinateContext,
    /// Resolved boundary rectangle (screen), if any
    pub bounds: Option<Rect>,
    pub axis: Axis,
    /// Current `left`/`top`, used for the locked coordinate
    pub pinned: Point,
}

/// Compute the new context-relative `left`/`top` for a drag move.
pub fn drag_position(step: &DragStep) -> Point {
    let proposed_screen = step.pointer - step.grab_offset;

    let candidate = match step.bounds {
        Some(bounds) => {
            let clamped = clamp_to_bounds(proposed_screen, step.panel_size, &bounds, step.axis);
            CoordinateConverter::screen_to_context(clamped, &step.context)
        }
        None => {
            let local = CoordinateConverter::screen_to_context(proposed_screen, &step.context);
            clamp_to_context(local, step.panel_size, step.context.limit, step.axis)
        }
    };

    pin_axis(candidate, step.pinned, step.axis)
}

// ============================================================================
// Resize
// ============================================================================

/// Inclusive per-axis size limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimits {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl SizeLimits {
    /// Limits that never clamp.
    pub const UNBOUNDED: SizeLimits = SizeLimits {
        min_width: 0.0,
        max_width: f32::INFINITY,
        min_height: 0.0,
        max_height: f32::INFINITY,
    };

    #[inline]
    pub fn clamp_width(&self, width: f32) -> f32 {
        clamp_range(width, self.min_width, self.max_width)
    }

    #[inline]
    pub fn clamp_height(&self, height: f32) -> f32 {
        clamp_range(height, self.min_height, self.max_height)
    }

    pub fn contains(&self, size: Size) -> bool {
        size.width >= self.min_width
            && size.width <= self.max_width
            && size.height >= self.min_height
            && size.height <= self.max_height
    }
}

/// Compute panel geometry for a resize move.
///
/// Each dimension is clamped before the matching position shift, so the edge
/// opposite the grabbed handle stays where it was at session start.
pub fn resize_geometry(
    direction: Direction,
    start: PanelGeometry,
    delta: Point,
    limits: &SizeLimits,
) -> PanelGeometry {
    let mut next = start;

    if direction.has_east() {
        next.width = limits.clamp_width(start.width + delta.x);
    }
    if direction.has_west() {
        next.width = limits.clamp_width(start.width - delta.x);
        next.left = start.left + (start.width - next.width);
    }
    if direction.has_south() {
        next.height = limits.clamp_height(start.height + delta.y);
    }
    if direction.has_north() {
        next.height = limits.clamp_height(start.height - delta.y);
        next.top = start.top + (start.height - next.height);
    }

    next
}
