//! Resize-by-handle controller.
//!
//! Attaching a [`Resizable`] synthesizes eight handles around the panel's
//! edges and corners. Dragging a handle changes the panel's size, and for
//! north/west handles its position, so the opposite edge stays put. There is
//! no boundary clamp; only per-axis min/max limits apply.

mod handlers;
mod handles;
mod options;

pub use handles::{HandlePlacement, HandleSpec};
pub use options::{ResizeConfig, ResizeEndFn, ResizeOptions, ResizeStartFn, ResizeUpdate};

use crate::host::{EventKind, Listener, PanelHost, StyleTarget};
use crate::input::{ResizeState, SizeLimits};
use crate::types::{Direction, ElementId, Point};
use tracing::debug;

/// A resize controller bound to one panel.
pub struct Resizable<H: PanelHost> {
    host: H,
    /// `None` once destroyed, or when attached outside an interactive host
    inner: Option<ResizeInner>,
}

struct ResizeInner {
    config: ResizeConfig,
    limits: SizeLimits,
    on_resize_start: Option<ResizeStartFn>,
    on_resize_end: Option<ResizeEndFn>,
    /// Handle elements in creation order
    handles: Vec<(Direction, ElementId)>,
    state: ResizeState,
}

impl ResizeInner {
    fn direction_of(&self, element: ElementId) -> Option<Direction> {
        self.handles
            .iter()
            .find(|(_, id)| *id == element)
            .map(|(dir, _)| *dir)
    }
}

impl<H: PanelHost> Resizable<H> {
    /// Attach resize behavior to the host's panel.
    ///
    /// On a non-interactive host this returns an inert controller.
    pub fn attach(mut host: H, options: ResizeOptions) -> Self {
        if !host.is_interactive() {
            debug!("Host is not interactive; resize controller is inert");
            return Self { host, inner: None };
        }

        let ResizeOptions {
            config,
            on_resize_start,
            on_resize_end,
        } = options;
        let config = config.normalized();

        let handles: Vec<(Direction, ElementId)> = HandleSpec::all()
            .iter()
            .map(|spec| {
                let id = host.create_handle(spec);
                host.add_listener(Listener::element(id, EventKind::PointerDown));
                if config.disabled {
                    host.set_visible(id, false);
                }
                (spec.direction, id)
            })
            .collect();

        debug!(
            panel = %host.panel(),
            handles = handles.len(),
            disabled = config.disabled,
            "Resize controller attached"
        );

        Self {
            host,
            inner: Some(ResizeInner {
                limits: config.limits(),
                config,
                on_resize_start,
                on_resize_end,
                handles,
                state: ResizeState::Idle,
            }),
        }
    }

    /// Apply live reconfiguration. Toggling `disabled` hides or shows the
    /// handles without removing them.
    pub fn update(&mut self, update: ResizeUpdate) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };

        let mut config = inner.config.clone();
        update.apply_limits(&mut config);
        let was_disabled = config.disabled;
        if let Some(disabled) = update.disabled {
            config.disabled = disabled;
        }
        let config = config.normalized();

        if let Some(f) = update.on_resize_start {
            inner.on_resize_start = Some(f);
        }
        if let Some(f) = update.on_resize_end {
            inner.on_resize_end = Some(f);
        }

        if was_disabled != config.disabled {
            let visible = !config.disabled;
            for (_, id) in &inner.handles {
                self.host.set_visible(*id, visible);
            }
            debug!(disabled = config.disabled, "Resize handles toggled");
        }

        inner.limits = config.limits();
        inner.config = config;
    }

    /// Remove the handles and every listener. Safe to call more than once.
    pub fn destroy(&mut self) {
        let Some(mut inner) = self.inner.take() else {
            return;
        };

        for (_, id) in inner.handles.drain(..) {
            self.host
                .remove_listener(Listener::element(id, EventKind::PointerDown));
            self.host.remove_element(id);
        }

        if inner.state.finish().is_some() {
            for listener in Listener::session_pair() {
                self.host.remove_listener(listener);
            }
            self.host.set_cursor(StyleTarget::Document, None);
            self.host.set_user_select(StyleTarget::Document, true);
        }

        debug!(panel = %self.host.panel(), "Resize controller destroyed");
    }

    /// Handle under a screen-space point, for hosts that route presses by
    /// coordinates. Corners win over the edges they overlap.
    pub fn handle_at(&self, point: Point) -> Option<(Direction, ElementId)> {
        let inner = self.inner.as_ref()?;
        if inner.config.disabled {
            return None;
        }

        let rect = self.host.panel_rect();
        let local = point - rect.origin;
        let hit = |&&(dir, _): &&(Direction, ElementId)| {
            HandlePlacement::for_direction(dir)
                .resolve(rect.size)
                .contains(local)
        };

        let corners = inner.handles.iter().filter(|(dir, _)| dir.is_corner());
        let edges = inner.handles.iter().filter(|(dir, _)| !dir.is_corner());
        corners.chain(edges).find(hit).copied()
    }

    pub fn is_attached(&self) -> bool {
        self.inner.is_some()
    }

    pub fn is_resizing(&self) -> bool {
        self.inner.as_ref().is_some_and(|i| i.state.is_resizing())
    }

    /// Direction of the active session, if any.
    pub fn active_direction(&self) -> Option<Direction> {
        self.inner.as_ref().and_then(|i| i.state.direction())
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.as_ref().is_some_and(|i| i.config.disabled)
    }

    /// Handle elements in creation order.
    pub fn handles(&self) -> &[(Direction, ElementId)] {
        self.inner
            .as_ref()
            .map(|i| i.handles.as_slice())
            .unwrap_or(&[])
    }

    pub fn config(&self) -> Option<&ResizeConfig> {
        self.inner.as_ref().map(|i| &i.config)
    }

    pub fn limits(&self) -> Option<SizeLimits> {
        self.inner.as_ref().map(|i| i.limits)
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: PanelHost> Drop for Resizable<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}
