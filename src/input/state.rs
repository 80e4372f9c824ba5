//! Session state machines for the drag and resize controllers.
//!
//! ## State Transitions
//!
//! ```text
//! DragState:   Idle -> Dragging   (primary press on the drag handle)
//!              Dragging -> Idle   (release anywhere)
//!
//! ResizeState: Idle -> Resizing   (primary press on an enabled resize handle)
//!              Resizing -> Idle   (release anywhere)
//! ```
//!
//! Each controller holds exactly one of these, so a second concurrent
//! session on the same controller cannot be represented.

use crate::types::{Axis, Direction, PanelGeometry, Point};

/// Ephemeral state of one drag, from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Offset from the panel's top-left to the pointer at grab time
    pub grab_offset: Point,
    /// Panel `left`/`top` when the session started
    pub start_position: Point,
    /// Axis constraint for this session
    pub axis: Axis,
}

/// Ephemeral state of one resize, from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    /// Handle that was grabbed
    pub direction: Direction,
    /// Pointer position at press
    pub start_pointer: Point,
    /// Panel geometry at press
    pub start: PanelGeometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn start(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// End the session, returning it if one was active.
    pub fn finish(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing(ResizeSession),
}

impl ResizeState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        match self {
            Self::Resizing(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Direction of the active session
    pub fn direction(&self) -> Option<Direction> {
        self.session().map(|s| s.direction)
    }

    pub fn start(&mut self, session: ResizeSession) {
        *self = Self::Resizing(session);
    }

    pub fn finish(&mut self) -> Option<ResizeSession> {
        match std::mem::take(self) {
            Self::Resizing(session) => Some(session),
            Self::Idle => None,
        }
    }
}
