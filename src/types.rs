//! Core types shared by the drag and resize controllers.
//!
//! Geometry is expressed in CSS pixels as `f32`. Screen-space values are
//! relative to the viewport origin; context-space values are relative to the
//! panel's positioning context (what `left`/`top` are measured against).

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D point or offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle (origin at top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Build a rectangle from its left/top/right/bottom edges.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Inclusive point containment.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// True if `other` lies entirely within `self` (edges may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Position and size of a panel as written to its style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

impl PanelGeometry {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Bottom-right corner in the same coordinate space as `left`/`top`.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.left + self.width, self.top + self.height)
    }
}

// ============================================================================
// Host identifiers
// ============================================================================

/// Opaque handle to an element owned by the host (the panel, a drag handle,
/// a synthesized resize handle, or a boundary element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mouse button of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    #[inline]
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }
}

/// CSS positioning scheme of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

// ============================================================================
// Axis
// ============================================================================

/// Axes along which a drag may move the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Both,
}

impl Axis {
    #[inline]
    pub fn allows_x(self) -> bool {
        matches!(self, Self::X | Self::Both)
    }

    #[inline]
    pub fn allows_y(self) -> bool {
        matches!(self, Self::Y | Self::Both)
    }
}

// ============================================================================
// Resize direction
// ============================================================================

/// Compass direction of a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    /// All directions, in handle creation order.
    pub const ALL: [Direction; 8] = [
        Direction::SE,
        Direction::E,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::N,
        Direction::NE,
        Direction::NW,
    ];

    /// Grabbing this handle moves the north (top) edge.
    pub fn has_north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    /// Grabbing this handle moves the south (bottom) edge.
    pub fn has_south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    /// Grabbing this handle moves the east (right) edge.
    pub fn has_east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    /// Grabbing this handle moves the west (left) edge.
    pub fn has_west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    pub fn is_corner(self) -> bool {
        matches!(self, Self::NE | Self::NW | Self::SE | Self::SW)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }

    /// Parse a direction tag such as `"nw"`.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == tag)
    }

    /// Resize cursor shown over this handle.
    pub fn cursor(self) -> Cursor {
        match self {
            Self::N | Self::S => Cursor::NsResize,
            Self::E | Self::W => Cursor::EwResize,
            Self::NE | Self::SW => Cursor::NeswResize,
            Self::NW | Self::SE => Cursor::NwseResize,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Cursor affordances requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    Grab,
    Grabbing,
    NsResize,
    EwResize,
    NeswResize,
    NwseResize,
}

impl Cursor {
    /// CSS `cursor` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::NsResize => "ns-resize",
            Self::EwResize => "ew-resize",
            Self::NeswResize => "nesw-resize",
            Self::NwseResize => "nwse-resize",
        }
    }
}
