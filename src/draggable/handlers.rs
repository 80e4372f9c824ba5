//! Drag pointer handlers - press on handle, track at window scope, release.
//!
//! Move and release listeners are registered when a drag starts and removed
//! when it ends, so an idle controller only listens for presses on its handle.

use super::Draggable;
use crate::constants::INTERACTIVE_SELECTOR;
use crate::host::{EventKind, Listener, ListenerTarget, PanelHost, StyleTarget};
use crate::input::constraints::{DragStep, drag_position};
use crate::input::coords::CoordinateContext;
use crate::input::{DragSession, EventResponse, PanelEvent, PointerEvent};
use crate::profile_scope;
use crate::types::{Cursor, ElementId};
use tracing::{debug, trace};

impl<H: PanelHost> Draggable<H> {
    /// Press delivered to `element`. Starts a drag when `element` is the
    /// handle, the button is primary and the target is not an interactive
    /// control.
    pub fn pointer_down(&mut self, element: ElementId, event: &PointerEvent) -> EventResponse {
        let Some(inner) = self.inner.as_mut() else {
            return EventResponse::IGNORED;
        };
        if element != inner.handle || inner.state.is_dragging() {
            return EventResponse::IGNORED;
        }
        if self.host.closest_matches(event.target, INTERACTIVE_SELECTOR) {
            trace!(element = %event.target, "Press on interactive control; not dragging");
            return EventResponse::IGNORED;
        }
        if !event.button.is_primary() {
            return EventResponse::IGNORED;
        }

        let panel = self.host.panel();
        let panel_rect = self.host.panel_rect();
        let session = DragSession {
            grab_offset: event.position - panel_rect.origin,
            start_position: inner.position,
            axis: inner.config.axis,
        };
        inner.state.start(session);

        self.host
            .set_cursor(StyleTarget::Element(inner.handle), Some(Cursor::Grabbing));
        self.host.set_user_select(StyleTarget::Element(panel), false);

        if let Some(on_start) = inner.on_drag_start.as_mut() {
            on_start(event, panel);
        }

        for listener in Listener::session_pair() {
            self.host.add_listener(listener);
        }

        debug!(
            panel = %panel,
            x = session.start_position.x,
            y = session.start_position.y,
            "Drag started"
        );
        EventResponse::CAPTURED
    }

    /// Window-scope move while dragging.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> EventResponse {
        profile_scope!("drag_pointer_move");

        let Some(inner) = self.inner.as_mut() else {
            return EventResponse::IGNORED;
        };
        let Some(session) = inner.state.session().copied() else {
            return EventResponse::IGNORED;
        };

        let context = CoordinateContext::resolve(
            self.host.positioning_context(),
            self.host.viewport_size(),
        );
        let bounds = inner.config.bounds.as_ref().and_then(|bounds_target| {
            let rect = self.host.resolve_bounds(bounds_target);
            if rect.is_none() {
                debug!(?bounds_target, "Boundary did not resolve; clamping to context");
            }
            rect
        });

        let position = drag_position(&DragStep {
            pointer: event.position,
            grab_offset: session.grab_offset,
            panel_size: self.host.panel_rect().size,
            context,
            bounds,
            axis: session.axis,
            pinned: self.host.style_offset(),
        });

        inner.position = position;
        self.host.set_position(position);
        self.host.dispatch(PanelEvent::Dragged {
            x: position.x,
            y: position.y,
        });

        trace!(x = position.x, y = position.y, "Drag move");
        EventResponse::TRACKED
    }

    /// Window-scope release; ends the drag.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> EventResponse {
        let Some(inner) = self.inner.as_mut() else {
            return EventResponse::IGNORED;
        };
        if inner.state.finish().is_none() {
            return EventResponse::IGNORED;
        }

        let panel = self.host.panel();
        self.host
            .set_cursor(StyleTarget::Element(inner.handle), Some(Cursor::Grab));
        self.host.set_user_select(StyleTarget::Element(panel), true);

        if let Some(on_end) = inner.on_drag_end.as_mut() {
            on_end(event, panel, inner.position);
        }

        for listener in Listener::session_pair() {
            self.host.remove_listener(listener);
        }

        debug!(
            panel = %panel,
            x = inner.position.x,
            y = inner.position.y,
            "Drag ended"
        );
        EventResponse::HANDLED
    }

    /// Route an event by listener registration. Events for listeners this
    /// controller does not hold are ignored.
    pub fn handle_event(
        &mut self,
        target: ListenerTarget,
        kind: EventKind,
        event: &PointerEvent,
    ) -> EventResponse {
        match (target, kind) {
            (ListenerTarget::Element(element), EventKind::PointerDown) => {
                self.pointer_down(element, event)
            }
            (ListenerTarget::Window, EventKind::PointerMove) => self.pointer_move(event),
            (ListenerTarget::Window, EventKind::PointerUp) => self.pointer_up(event),
            _ => EventResponse::IGNORED,
        }
    }
}
