//! Coordinate conversion between screen space and a panel's positioning context.
//!
//! Pointer events and boundary rectangles arrive in screen coordinates while
//! `left`/`top` are relative to the positioning context.

use crate::host::PositioningContext;
use crate::types::{Point, Size};

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateContext {
    /// Screen-space origin of the positioning context
    pub origin: Point,
    /// Area the panel may occupy when no boundary applies
    pub limit: Size,
}

impl CoordinateContext {
    /// Build from the host's context, falling back to the viewport.
    ///
    /// A context that reports a zero client dimension uses the viewport's
    /// dimension instead.
    pub fn resolve(context: Option<PositioningContext>, viewport: Size) -> Self {
        match context {
            Some(ctx) => Self {
                origin: ctx.origin,
                limit: Size::new(
                    non_zero_or(ctx.client_size.width, viewport.width),
                    non_zero_or(ctx.client_size.height, viewport.height),
                ),
            },
            None => Self {
                origin: Point::ZERO,
                limit: viewport,
            },
        }
    }
}

#[inline]
fn non_zero_or(value: f32, fallback: f32) -> f32 {
    if value > 0.0 { value } else { fallback }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to context coordinates
    #[inline]
    pub fn screen_to_context(screen_pos: Point, ctx: &CoordinateContext) -> Point {
        screen_pos - ctx.origin
    }

    /// Convert a context position to screen coordinates
    #[inline]
    pub fn context_to_screen(context_pos: Point, ctx: &CoordinateContext) -> Point {
        context_pos + ctx.origin
    }
}
