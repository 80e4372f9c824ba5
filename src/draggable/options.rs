//! Drag controller configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::input::PointerEvent;
use crate::types::{Axis, ElementId, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Called when a drag starts, with the press event and the panel.
pub type DragStartFn = Box<dyn FnMut(&PointerEvent, ElementId)>;

/// Called when a drag ends, with the release event, the panel and its final position.
pub type DragEndFn = Box<dyn FnMut(&PointerEvent, ElementId, Point)>;

/// Boundary element a drag is confined to.
///
/// Resolved through the host on every move, so the boundary may itself move
/// or resize during a drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundsTarget {
    /// Selector looked up in the document
    Selector(String),
    /// Direct element reference
    Element(ElementId),
}

impl From<&str> for BoundsTarget {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl From<ElementId> for BoundsTarget {
    fn from(element: ElementId) -> Self {
        Self::Element(element)
    }
}

/// Serialisable part of the drag options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Restrict presses to a descendant matching this selector
    pub handle_selector: Option<String>,
    /// Explicit starting `left`/`top`; defaults to the panel's layout offset
    pub initial_position: Option<Point>,
    pub bounds: Option<BoundsTarget>,
    pub axis: Axis,
}

impl DragConfig {
    /// Parse a config from JSON, e.g. `{"axis": "x", "bounds": "#rack"}`.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        match self.handle_selector.as_deref() {
            Some(selector) if selector.trim().is_empty() => Err(ConfigError::EmptySelector),
            _ => Ok(()),
        }
    }
}

/// Options accepted by [`Draggable::attach`](super::Draggable::attach).
#[derive(Default)]
pub struct DragOptions {
    pub config: DragConfig,
    pub on_drag_start: Option<DragStartFn>,
    pub on_drag_end: Option<DragEndFn>,
}

impl DragOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: DragConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn handle_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.handle_selector = Some(selector.into());
        self
    }

    pub fn initial_position(mut self, x: f32, y: f32) -> Self {
        self.config.initial_position = Some(Point::new(x, y));
        self
    }

    pub fn bounds(mut self, bounds: impl Into<BoundsTarget>) -> Self {
        self.config.bounds = Some(bounds.into());
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.config.axis = axis;
        self
    }

    pub fn on_drag_start(mut self, f: impl FnMut(&PointerEvent, ElementId) + 'static) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    pub fn on_drag_end(mut self, f: impl FnMut(&PointerEvent, ElementId, Point) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for DragOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragOptions")
            .field("config", &self.config)
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}

/// Live reconfiguration. `None` keeps the current value.
#[derive(Default)]
pub struct DragUpdate {
    pub axis: Option<Axis>,
    pub bounds: Option<BoundsTarget>,
    pub handle_selector: Option<String>,
    pub on_drag_start: Option<DragStartFn>,
    pub on_drag_end: Option<DragEndFn>,
}

impl DragUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn bounds(mut self, bounds: impl Into<BoundsTarget>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    pub fn handle_selector(mut self, selector: impl Into<String>) -> Self {
        self.handle_selector = Some(selector.into());
        self
    }

    pub fn on_drag_start(mut self, f: impl FnMut(&PointerEvent, ElementId) + 'static) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    pub fn on_drag_end(mut self, f: impl FnMut(&PointerEvent, ElementId, Point) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for DragUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragUpdate")
            .field("axis", &self.axis)
            .field("bounds", &self.bounds)
            .field("handle_selector", &self.handle_selector)
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}
