//! Pointer events fed into controllers and notifications emitted by them.

use crate::types::{ElementId, MouseButton, Point};
use serde::{Deserialize, Serialize};

/// A mouse event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer location in screen (client) coordinates
    pub position: Point,
    pub button: MouseButton,
    /// Innermost element under the pointer
    pub target: ElementId,
}

impl PointerEvent {
    pub fn new(position: Point, button: MouseButton, target: ElementId) -> Self {
        Self {
            position,
            button,
            target,
        }
    }

    /// Primary-button event at `(x, y)` targeting `target`.
    pub fn primary(x: f32, y: f32, target: ElementId) -> Self {
        Self::new(Point::new(x, y), MouseButton::Primary, target)
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }
}

/// What the host should do with the native event after a controller saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The controller acted on the event
    pub handled: bool,
    /// Suppress the default action (text selection, native drag)
    pub prevent_default: bool,
    /// Keep the event from reaching ancestors, e.g. an outer draggable
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Event not consumed.
    pub const IGNORED: EventResponse = EventResponse {
        handled: false,
        prevent_default: false,
        stop_propagation: false,
    };

    /// Event consumed; let it continue normally.
    pub const HANDLED: EventResponse = EventResponse {
        handled: true,
        prevent_default: false,
        stop_propagation: false,
    };

    /// Event consumed with its default action suppressed.
    pub const TRACKED: EventResponse = EventResponse {
        handled: true,
        prevent_default: true,
        stop_propagation: false,
    };

    /// Event consumed, default suppressed, propagation stopped.
    pub const CAPTURED: EventResponse = EventResponse {
        handled: true,
        prevent_default: true,
        stop_propagation: true,
    };
}

/// Notification dispatched on the panel during every active move.
///
/// Serialises as `{"type": "dragged", "x": .., "y": ..}` or
/// `{"type": "resized", "width": .., "height": .., "left": .., "top": ..}`
/// so hosts can forward it as a custom event payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PanelEvent {
    Dragged { x: f32, y: f32 },
    Resized {
        width: f32,
        height: f32,
        left: f32,
        top: f32,
    },
}

impl PanelEvent {
    /// Custom event name (`"dragged"` or `"resized"`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dragged { .. } => "dragged",
            Self::Resized { .. } => "resized",
        }
    }
}
