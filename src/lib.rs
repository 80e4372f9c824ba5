//! Drag-to-move and resize-by-handle controllers for UI panels.
//!
//! Both controllers are host-agnostic state machines. A host (a DOM binding,
//! a canvas renderer, a test double) implements [`host::PanelHost`], forwards
//! pointer events into the controller and applies the style changes it asks
//! for.
//!
//! ```ignore
//! use homelab_panels::{Axis, DragOptions, Draggable, PointerEvent};
//!
//! let mut drag = Draggable::attach(host, DragOptions::new().axis(Axis::X).bounds("#rack"));
//! drag.pointer_down(panel, &PointerEvent::primary(50.0, 50.0, panel));
//! drag.pointer_move(&PointerEvent::primary(120.0, 50.0, panel));
//! drag.pointer_up(&PointerEvent::primary(120.0, 50.0, panel));
//! drag.destroy();
//! ```

pub mod constants;
pub mod draggable;
pub mod error;
pub mod host;
pub mod input;
pub mod logging;
pub mod perf;
pub mod resizable;
pub mod types;

pub use draggable::{BoundsTarget, DragConfig, DragOptions, DragUpdate, Draggable};
pub use error::{ConfigError, ConfigResult};
pub use host::{GeometryProvider, PanelHost, PositioningContext};
pub use input::{EventResponse, PanelEvent, PointerEvent, SizeLimits};
pub use resizable::{HandleSpec, Resizable, ResizeConfig, ResizeOptions, ResizeUpdate};
pub use types::{Axis, Cursor, Direction, ElementId, MouseButton, PanelGeometry, Point, Rect, Size};
