//! Crate-wide constants.
//!
//! Centralizes default limits and handle layout values used by the
//! drag and resize controllers.

// ============================================================================
// Resize Defaults
// ============================================================================

/// Default minimum panel width in pixels
pub const DEFAULT_MIN_WIDTH: f32 = 200.0;

/// Default minimum panel height in pixels
pub const DEFAULT_MIN_HEIGHT: f32 = 150.0;

/// Default maximum panel width (unbounded)
pub const DEFAULT_MAX_WIDTH: f32 = f32::INFINITY;

/// Default maximum panel height (unbounded)
pub const DEFAULT_MAX_HEIGHT: f32 = f32::INFINITY;

// ============================================================================
// Handle Layout
// ============================================================================

/// Thickness of an edge handle (n/s/e/w)
pub const HANDLE_EDGE_THICKNESS: f32 = 4.0;

/// Inset of edge handles from the panel corners, leaving room for corner handles
pub const HANDLE_EDGE_INSET: f32 = 4.0;

/// Side length of a square corner handle (ne/nw/se/sw)
pub const HANDLE_CORNER_SIZE: f32 = 8.0;

/// Stacking order of resize handles above panel content
pub const HANDLE_Z_INDEX: i32 = 10;

/// Class applied to every synthesized resize handle
pub const HANDLE_CLASS: &str = "resize-handle";

// ============================================================================
// Input
// ============================================================================

/// Presses whose target sits inside one of these never start a drag.
pub const INTERACTIVE_SELECTOR: &str = "input, textarea, button, select, a[href]";

// ============================================================================
// Logging
// ============================================================================

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "homelab_panels=info";
