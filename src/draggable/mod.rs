//! Drag-to-move controller.
//!
//! Attaching a [`Draggable`] to a panel makes it movable by pressing on the
//! panel (or a descendant handle) and moving the pointer. Movement can be
//! locked to one axis and confined to a boundary element.
//!
//! ## Lifecycle
//!
//! - `attach` - positions the panel, resolves the handle, registers the press listener
//! - `pointer_down` / `pointer_move` / `pointer_up` - driven by the host (see `handlers`)
//! - `update` - swaps axis, bounds, callbacks or the handle without re-attaching
//! - `destroy` - releases every listener; also runs on drop

mod handlers;
mod options;

pub use options::{BoundsTarget, DragConfig, DragEndFn, DragOptions, DragStartFn, DragUpdate};

use crate::host::{EventKind, GeometryProvider, Listener, PanelHost, StyleTarget};
use crate::input::DragState;
use crate::types::{Cursor, ElementId, Point, PositionMode};
use tracing::{debug, warn};

/// A drag controller bound to one panel.
pub struct Draggable<H: PanelHost> {
    host: H,
    /// `None` once destroyed, or when attached outside an interactive host
    inner: Option<DragInner>,
}

struct DragInner {
    config: DragConfig,
    on_drag_start: Option<DragStartFn>,
    on_drag_end: Option<DragEndFn>,
    handle: ElementId,
    position: Point,
    state: DragState,
}

impl<H: PanelHost> Draggable<H> {
    /// Attach drag behavior to the host's panel.
    ///
    /// On a non-interactive host this returns an inert controller; every
    /// method is then a no-op.
    pub fn attach(mut host: H, options: DragOptions) -> Self {
        if !host.is_interactive() {
            debug!("Host is not interactive; drag controller is inert");
            return Self { host, inner: None };
        }

        let DragOptions {
            mut config,
            on_drag_start,
            on_drag_end,
        } = options;

        if let Err(e) = config.validate() {
            warn!("Invalid drag config ({}); ignoring handle selector", e);
            config.handle_selector = None;
        }

        if host.position_mode() == PositionMode::Static {
            host.set_position_mode(PositionMode::Relative);
        }

        let position = config
            .initial_position
            .unwrap_or_else(|| host.layout_offset());
        host.set_position(position);

        let handle = resolve_handle(&host, config.handle_selector.as_deref());
        host.set_cursor(StyleTarget::Element(handle), Some(Cursor::Grab));
        host.add_listener(Listener::element(handle, EventKind::PointerDown));

        debug!(
            panel = %host.panel(),
            handle = %handle,
            axis = ?config.axis,
            "Drag controller attached"
        );

        Self {
            host,
            inner: Some(DragInner {
                config,
                on_drag_start,
                on_drag_end,
                handle,
                position,
                state: DragState::Idle,
            }),
        }
    }

    /// Apply live reconfiguration.
    pub fn update(&mut self, update: DragUpdate) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };

        if let Some(axis) = update.axis {
            inner.config.axis = axis;
        }
        if let Some(bounds) = update.bounds {
            inner.config.bounds = Some(bounds);
        }
        if let Some(f) = update.on_drag_start {
            inner.on_drag_start = Some(f);
        }
        if let Some(f) = update.on_drag_end {
            inner.on_drag_end = Some(f);
        }

        let Some(selector) = update.handle_selector else {
            return;
        };
        if selector.trim().is_empty()
            || inner.config.handle_selector.as_deref() == Some(selector.as_str())
        {
            return;
        }

        self.host
            .remove_listener(Listener::element(inner.handle, EventKind::PointerDown));
        self.host.set_cursor(StyleTarget::Element(inner.handle), None);

        let handle = resolve_handle(&self.host, Some(selector.as_str()));
        self.host.set_cursor(StyleTarget::Element(handle), Some(Cursor::Grab));
        self.host
            .add_listener(Listener::element(handle, EventKind::PointerDown));

        debug!(old = %inner.handle, new = %handle, "Drag handle changed");
        inner.handle = handle;
        inner.config.handle_selector = Some(selector);
    }

    /// Release all listeners and the handle cursor. Safe to call more than once.
    pub fn destroy(&mut self) {
        let Some(mut inner) = self.inner.take() else {
            return;
        };

        self.host
            .remove_listener(Listener::element(inner.handle, EventKind::PointerDown));
        self.host.set_cursor(StyleTarget::Element(inner.handle), None);

        if inner.state.finish().is_some() {
            for listener in Listener::session_pair() {
                self.host.remove_listener(listener);
            }
            let panel = self.host.panel();
            self.host.set_user_select(StyleTarget::Element(panel), true);
        }

        debug!(panel = %self.host.panel(), "Drag controller destroyed");
    }

    /// False for inert or destroyed controllers.
    pub fn is_attached(&self) -> bool {
        self.inner.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.as_ref().is_some_and(|i| i.state.is_dragging())
    }

    /// Last `left`/`top` written by this controller.
    pub fn position(&self) -> Option<Point> {
        self.inner.as_ref().map(|i| i.position)
    }

    /// Element currently receiving drag presses.
    pub fn handle(&self) -> Option<ElementId> {
        self.inner.as_ref().map(|i| i.handle)
    }

    pub fn config(&self) -> Option<&DragConfig> {
        self.inner.as_ref().map(|i| &i.config)
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: PanelHost> Drop for Draggable<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Resolve the drag handle, falling back to the panel when the selector
/// matches nothing.
fn resolve_handle<G: GeometryProvider>(host: &G, selector: Option<&str>) -> ElementId {
    let panel = host.panel();
    let Some(selector) = selector else {
        return panel;
    };
    host.query_selector(selector).unwrap_or_else(|| {
        warn!(
            selector = %selector,
            "Drag handle selector not found; panel itself will be draggable"
        );
        panel
    })
}
