//! Pointer input plumbing shared by the drag and resize controllers.
//!
//! ## Architecture
//!
//! Each controller keeps an explicit session state machine (`DragState`,
//! `ResizeState`) and delegates all geometry to pure functions, so the
//! clamping rules can be tested without a host.
//!
//! ## Modules
//!
//! - `state` - Session state machines
//! - `events` - Pointer events in, panel notifications out
//! - `coords` - Screen to positioning-context conversion
//! - `constraints` - Bounds clamping, axis locking and resize math

pub mod constraints;
pub mod coords;
mod events;
mod state;

pub use constraints::SizeLimits;
pub use events::{EventResponse, PanelEvent, PointerEvent};
pub use state::{DragSession, DragState, ResizeSession, ResizeState};
