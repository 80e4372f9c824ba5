//! Resize controller configuration.

use crate::constants::{DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH};
use crate::error::{ConfigError, ConfigResult};
use crate::input::{PointerEvent, SizeLimits};
use crate::types::{ElementId, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Called when a resize starts, with the press event and the panel.
pub type ResizeStartFn = Box<dyn FnMut(&PointerEvent, ElementId)>;

/// Called when a resize ends, with the release event, the panel and its measured size.
pub type ResizeEndFn = Box<dyn FnMut(&PointerEvent, ElementId, Size)>;

/// Serialisable part of the resize options.
///
/// Maximums are `None` when unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
    pub disabled: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            max_width: None,
            max_height: None,
            disabled: false,
        }
    }
}

impl ResizeConfig {
    /// Parse a config from JSON, e.g. `{"min_width": 320, "max_height": 900}`.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        check_min("min_width", self.min_width)?;
        check_min("min_height", self.min_height)?;
        check_max("max_width", self.max_width)?;
        check_max("max_height", self.max_height)?;

        let limits = self.limits();
        if limits.min_width > limits.max_width {
            return Err(ConfigError::MinExceedsMax {
                axis: "width",
                min: limits.min_width,
                max: limits.max_width,
            });
        }
        if limits.min_height > limits.max_height {
            return Err(ConfigError::MinExceedsMax {
                axis: "height",
                min: limits.min_height,
                max: limits.max_height,
            });
        }
        Ok(())
    }

    /// Repair an invalid config: bad minimums fall back to their defaults,
    /// bad maximums become unbounded, and a maximum below its minimum is
    /// raised to the minimum.
    pub fn normalized(mut self) -> Self {
        if let Err(e) = self.validate() {
            warn!("Invalid resize config ({}); normalizing", e);
        } else {
            return self;
        }

        if check_min("min_width", self.min_width).is_err() {
            self.min_width = DEFAULT_MIN_WIDTH;
        }
        if check_min("min_height", self.min_height).is_err() {
            self.min_height = DEFAULT_MIN_HEIGHT;
        }
        if check_max("max_width", self.max_width).is_err() {
            self.max_width = None;
        }
        if check_max("max_height", self.max_height).is_err() {
            self.max_height = None;
        }
        self.max_width = self.max_width.map(|max| max.max(self.min_width));
        self.max_height = self.max_height.map(|max| max.max(self.min_height));
        self
    }

    pub fn limits(&self) -> SizeLimits {
        SizeLimits {
            min_width: self.min_width,
            max_width: self.max_width.unwrap_or(f32::INFINITY),
            min_height: self.min_height,
            max_height: self.max_height.unwrap_or(f32::INFINITY),
        }
    }
}

fn check_min(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { field, value })
    }
}

fn check_max(field: &'static str, value: Option<f32>) -> ConfigResult<()> {
    match value {
        Some(v) if v.is_nan() || v < 0.0 => Err(ConfigError::InvalidDimension { field, value: v }),
        _ => Ok(()),
    }
}

/// Options accepted by [`Resizable::attach`](super::Resizable::attach).
#[derive(Default)]
pub struct ResizeOptions {
    pub config: ResizeConfig,
    pub on_resize_start: Option<ResizeStartFn>,
    pub on_resize_end: Option<ResizeEndFn>,
}

impl ResizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ResizeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.config.min_width = width;
        self.config.min_height = height;
        self
    }

    pub fn max_size(mut self, width: f32, height: f32) -> Self {
        self.config.max_width = Some(width);
        self.config.max_height = Some(height);
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.config.min_width = width;
        self
    }

    pub fn max_width(mut self, width: f32) -> Self {
        self.config.max_width = Some(width);
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.config.min_height = height;
        self
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.config.max_height = Some(height);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn on_resize_start(mut self, f: impl FnMut(&PointerEvent, ElementId) + 'static) -> Self {
        self.on_resize_start = Some(Box::new(f));
        self
    }

    pub fn on_resize_end(mut self, f: impl FnMut(&PointerEvent, ElementId, Size) + 'static) -> Self {
        self.on_resize_end = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for ResizeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeOptions")
            .field("config", &self.config)
            .field("on_resize_start", &self.on_resize_start.is_some())
            .field("on_resize_end", &self.on_resize_end.is_some())
            .finish()
    }
}

/// Live reconfiguration. `None` keeps the current value; pass
/// `f32::INFINITY` to lift a maximum.
#[derive(Default)]
pub struct ResizeUpdate {
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
    pub disabled: Option<bool>,
    pub on_resize_start: Option<ResizeStartFn>,
    pub on_resize_end: Option<ResizeEndFn>,
}

impl ResizeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn on_resize_start(mut self, f: impl FnMut(&PointerEvent, ElementId) + 'static) -> Self {
        self.on_resize_start = Some(Box::new(f));
        self
    }

    pub fn on_resize_end(mut self, f: impl FnMut(&PointerEvent, ElementId, Size) + 'static) -> Self {
        self.on_resize_end = Some(Box::new(f));
        self
    }

    /// Apply the size fields to `config`.
    pub(crate) fn apply_limits(&self, config: &mut ResizeConfig) {
        if let Some(v) = self.min_width {
            config.min_width = v;
        }
        if let Some(v) = self.min_height {
            config.min_height = v;
        }
        if let Some(v) = self.max_width {
            config.max_width = v.is_finite().then_some(v);
        }
        if let Some(v) = self.max_height {
            config.max_height = v.is_finite().then_some(v);
        }
    }
}

impl fmt::Debug for ResizeUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeUpdate")
            .field("min_width", &self.min_width)
            .field("min_height", &self.min_height)
            .field("max_width", &self.max_width)
            .field("max_height", &self.max_height)
            .field("disabled", &self.disabled)
            .field("on_resize_start", &self.on_resize_start.is_some())
            .field("on_resize_end", &self.on_resize_end.is_some())
            .finish()
    }
}
