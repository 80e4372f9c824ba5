//! Resize pointer handlers - press on a handle, track at window scope, release.

use super::Resizable;
use crate::host::{EventKind, Listener, ListenerTarget, PanelHost, StyleTarget};
use crate::input::constraints::resize_geometry;
use crate::input::{EventResponse, PanelEvent, PointerEvent, ResizeSession};
use crate::profile_scope;
use crate::types::{ElementId, PanelGeometry};
use tracing::{debug, trace};

impl<H: PanelHost> Resizable<H> {
    /// Press delivered to `element`. Starts a resize when `element` is one of
    /// this controller's handles, the button is primary and the controller is
    /// enabled. Accepted presses stop propagation so an outer drag
    /// controller does not also start.
    pub fn pointer_down(&mut self, element: ElementId, event: &PointerEvent) -> EventResponse {
        let Some(inner) = self.inner.as_mut() else {
            return EventResponse::IGNORED;
        };
        if inner.config.disabled || !event.button.is_primary() || inner.state.is_resizing() {
            return EventResponse::IGNORED;
        }
        let Some(direction) = inner.direction_of(element) else {
            return EventResponse::IGNORED;
        };

        let rect = self.host.panel_rect();
        let offset = self.host.style_offset();
        let session = ResizeSession {
            direction,
            start_pointer: event.position,
            start: PanelGeometry {
                width: rect.size.width,
                height: rect.size.height,
                left: offset.x,
                top: offset.y,
            },
        };
        inner.state.start(session);

        self.host
            .set_cursor(StyleTarget::Document, Some(direction.cursor()));
        self.host.set_user_select(StyleTarget::Document, false);

        let panel = self.host.panel();
        if let Some(on_start) = inner.on_resize_start.as_mut() {
            on_start(event, panel);
        }

        for listener in Listener::session_pair() {
            self.host.add_listener(listener);
        }

        debug!(
            panel = %panel,
            direction = %direction,
            width = session.start.width,
            height = session.start.height,
            "Resize started"
        );
        EventResponse::CAPTURED
    }

    /// Window-scope move while resizing.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> EventResponse {
        profile_scope!("resize_pointer_move");

        let Some(inner) = self.inner.as_mut() else {
            return EventResponse::IGNORED;
        };
        let Some(session) = inner.state.session().copied() else {
            return EventResponse::IGNORED;
        };

        let delta = event.position - session.start_pointer;
        let next = resize_geometry(session.direction, session.start, delta, &inner.limits);

        self.host.set_size(next.size());
        self.host.set_position(next.position());
        self.host.dispatch(PanelEvent::Resized {
            width: next.width,
            height: next.height,
            left: next.left,
            top: next.top,
        });

        trace!(
            width = next.width,
            height = next.height,
            left = next.left,
            top = next.top,
            "Resize move"
        );
        EventResponse::HANDLED
    }

    /// Window-scope release; ends the resize.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> EventResponse {
        let Some(inner) = self.inner.as_mut() else {
            return EventResponse::IGNORED;
        };
        let Some(session) = inner.state.finish() else {
            return EventResponse::IGNORED;
        };

        self.host.set_cursor(StyleTarget::Document, None);
        self.host.set_user_select(StyleTarget::Document, true);

        let panel = self.host.panel();
        let size = self.host.panel_rect().size;
        if let Some(on_end) = inner.on_resize_end.as_mut() {
            on_end(event, panel, size);
        }

        for listener in Listener::session_pair() {
            self.host.remove_listener(listener);
        }

        debug!(
            panel = %panel,
            direction = %session.direction,
            width = size.width,
            height = size.height,
            "Resize ended"
        );
        EventResponse::HANDLED
    }

    /// Route an event by listener registration.
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
