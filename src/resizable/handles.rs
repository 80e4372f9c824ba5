//! Resize handle layout.
//!
//! Each of the eight handles is an absolutely positioned child of the panel:
//! edges are thin strips inset from the corners, corners are small squares.

use crate::constants::{
    HANDLE_CLASS, HANDLE_CORNER_SIZE, HANDLE_EDGE_INSET, HANDLE_EDGE_THICKNESS, HANDLE_Z_INDEX,
};
use crate::types::{Cursor, Direction, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// CSS-style absolute placement within the panel. Unset offsets are `auto`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HandlePlacement {
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl HandlePlacement {
    pub fn for_direction(direction: Direction) -> Self {
        let edge = Some(HANDLE_EDGE_THICKNESS);
        let inset = Some(HANDLE_EDGE_INSET);
        let corner = Some(HANDLE_CORNER_SIZE);
        let flush = Some(0.0);

        match direction {
            Direction::N => Self { top: flush, left: inset, right: inset, height: edge, ..Self::default() },
            Direction::S => Self { bottom: flush, left: inset, right: inset, height: edge, ..Self::default() },
            Direction::E => Self { right: flush, top: inset, bottom: inset, width: edge, ..Self::default() },
            Direction::W => Self { left: flush, top: inset, bottom: inset, width: edge, ..Self::default() },
            Direction::NE => Self { top: flush, right: flush, width: corner, height: corner, ..Self::default() },
            Direction::NW => Self { top: flush, left: flush, width: corner, height: corner, ..Self::default() },
            Direction::SE => Self { bottom: flush, right: flush, width: corner, height: corner, ..Self::default() },
            Direction::SW => Self { bottom: flush, left: flush, width: corner, height: corner, ..Self::default() },
        }
    }

    /// Rectangle occupied inside a panel of `panel` size, in panel-local
    /// coordinates.
    pub fn resolve(&self, panel: Size) -> Rect {
        let (x, width) = resolve_span(self.left, self.right, self.width, panel.width);
        let (y, height) = resolve_span(self.top, self.bottom, self.height, panel.height);
        Rect::new(x, y, width, height)
    }
}

/// Resolve one axis of an absolutely positioned box.
fn resolve_span(start: Option<f32>, end: Option<f32>, extent: Option<f32>, container: f32) -> (f32, f32) {
    match (start, end, extent) {
        (Some(s), Some(e), None) => (s, (container - s - e).max(0.0)),
        (Some(s), _, Some(w)) => (s, w),
        (None, Some(e), Some(w)) => (container - e - w, w),
        (Some(s), None, None) => (s, (container - s).max(0.0)),
        (None, Some(e), None) => (0.0, (container - e).max(0.0)),
        (None, None, w) => (0.0, w.unwrap_or(container)),
    }
}

/// Everything a host needs to create one resize handle element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleSpec {
    pub direction: Direction,
    /// `resize-handle resize-<dir>`
    pub class_name: String,
    pub cursor: Cursor,
    pub placement: HandlePlacement,
    pub z_index: i32,
}

impl HandleSpec {
    pub fn for_direction(direction: Direction) -> Self {
        Self {
            direction,
            class_name: format!("{} resize-{}", HANDLE_CLASS, direction),
            cursor: direction.cursor(),
            placement: HandlePlacement::for_direction(direction),
            z_index: HANDLE_Z_INDEX,
        }
    }

    /// Specs for all eight handles in creation order.
    pub fn all() -> Vec<HandleSpec> {
        Direction::ALL.into_iter().map(Self::for_direction).collect()
    }

    /// Inline style for DOM hosts.
    pub fn css_text(&self) -> String {
        let mut css = format!(
            "position: absolute; z-index: {}; cursor: {};",
            self.z_index,
            self.cursor.as_css()
        );
        let p = &self.placement;
        for (name, value) in [
            ("top", p.top),
            ("right", p.right),
            ("bottom", p.bottom),
            ("left", p.left),
            ("width", p.width),
            ("height", p.height),
        ] {
            if let Some(v) = value {
                let _ = write!(css, " {}: {}px;", name, v);
            }
        }
        css
    }

    /// True if `local` (panel-local coordinates) falls on this handle.
    pub fn hit_test(&self, local: Point, panel: Size) -> bool {
        self.placement.resolve(panel).contains(local)
    }
}
