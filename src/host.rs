//! Host capability traits.
//!
//! Controllers never touch a rendering surface directly. Everything they read
//! about the panel goes through [`GeometryProvider`], and everything they change
//! goes through [`PanelHost`]. A browser binding implements these over the DOM
//! (`getBoundingClientRect`, `offsetParent`, `style.*`, `addEventListener`);
//! tests implement them over plain structs.

use crate::draggable::BoundsTarget;
use crate::input::PanelEvent;
use crate::resizable::HandleSpec;
use crate::types::{Cursor, ElementId, Point, PositionMode, Rect, Size};
use serde::{Deserialize, Serialize};

/// The element that establishes the coordinate origin for `left`/`top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositioningContext {
    /// Screen-space top-left of the context
    pub origin: Point,
    /// Inner size of the context (`clientWidth`/`clientHeight`)
    pub client_size: Size,
}

/// Where a style change applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    Element(ElementId),
    /// The whole document (`document.body`)
    Document,
}

/// Where a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Element(ElementId),
    Window,
}

/// Pointer event kinds a controller listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
}

/// A listener registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Listener {
    pub target: ListenerTarget,
    pub kind: EventKind,
}

impl Listener {
    pub fn element(element: ElementId, kind: EventKind) -> Self {
        Self {
            target: ListenerTarget::Element(element),
            kind,
        }
    }

    pub fn window(kind: EventKind) -> Self {
        Self {
            target: ListenerTarget::Window,
            kind,
        }
    }

    /// The pair of window-scope listeners held for the length of a session.
    pub fn session_pair() -> [Listener; 2] {
        [
            Self::window(EventKind::PointerMove),
            Self::window(EventKind::PointerUp),
        ]
    }
}

/// Read-only view of the environment a panel lives in.
pub trait GeometryProvider {
    /// False outside a browser-like environment. Controllers attached to a
    /// non-interactive host are inert.
    fn is_interactive(&self) -> bool {
        true
    }

    /// The panel being manipulated.
    fn panel(&self) -> ElementId;

    /// Screen-space rectangle of the panel.
    fn panel_rect(&self) -> Rect;

    /// Layout offset of the panel within its context (`offsetLeft`/`offsetTop`).
    fn layout_offset(&self) -> Point;

    /// Explicit `left`/`top` from the panel's style. Unset values read as zero.
    fn style_offset(&self) -> Point;

    fn position_mode(&self) -> PositionMode;

    /// `None` when the panel is positioned against the viewport.
    fn positioning_context(&self) -> Option<PositioningContext>;

    fn viewport_size(&self) -> Size;

    /// Screen-space rectangle of a boundary element, if it currently resolves.
    fn resolve_bounds(&self, target: &BoundsTarget) -> Option<Rect>;

    /// First descendant of the panel matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<ElementId>;

    /// True if `element` or one of its ancestors matches `selector`.
    fn closest_matches(&self, element: ElementId, selector: &str) -> bool;
}

/// Mutable side of the environment.
pub trait PanelHost: GeometryProvider {
    fn set_position_mode(&mut self, mode: PositionMode);

    /// Write `left`/`top`.
    fn set_position(&mut self, position: Point);

    /// Write `width`/`height`.
    fn set_size(&mut self, size: Size);

    /// Set or clear (`None`) a cursor override.
    fn set_cursor(&mut self, target: StyleTarget, cursor: Option<Cursor>);

    fn set_user_select(&mut self, target: StyleTarget, enabled: bool);

    /// Create a child element of the panel described by `spec`.
    fn create_handle(&mut self, spec: &HandleSpec) -> ElementId;

    fn remove_element(&mut self, element: ElementId);

    fn set_visible(&mut self, element: ElementId, visible: bool);

    fn add_listener(&mut self, listener: Listener);

    fn remove_listener(&mut self, listener: Listener);

    /// Dispatch a notification on the panel element.
    fn dispatch(&mut self, event: PanelEvent);
}
