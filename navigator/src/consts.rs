//! Shared numeric constants for the navigator crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Width of the island map in CSS pixels.
pub const CANVAS_WIDTH: f64 = 6500.0;

/// Height of the island map in CSS pixels.
pub const CANVAS_HEIGHT: f64 = 1600.0;

/// How far past the top/left (and bottom/right) edges the map may be dragged.
pub const OVERSCROLL_PX: f64 = 100.0;

/// Offset from a panel anchor to the approximate centre of its content box.
pub const CONTENT_OFFSET_X: f64 = 200.0;
pub const CONTENT_OFFSET_Y: f64 = 250.0;

// ── Motion ──────────────────────────────────────────────────────

/// Velocity multiplier applied on every coasting tick.
pub const DAMPING: f64 = 0.92;

/// Per-axis speed below which motion is considered stopped.
pub const STOP_THRESHOLD: f64 = 0.5;

/// Nominal frame duration that velocities are normalised to.
pub const TICK_MS: f64 = 16.0;

/// Duration of an eased navigate-to-panel animation.
pub const NAVIGATE_DURATION_MS: f64 = 800.0;

/// Minimum spacing between active-panel recomputations during drag/coast.
pub const PANEL_THROTTLE_MS: f64 = 100.0;

// ── Minimap ─────────────────────────────────────────────────────

pub const MINIMAP_WIDTH: f64 = 200.0;
pub const MINIMAP_HEIGHT: f64 = 150.0;

/// Half the diameter of a panel marker dot.
pub const MINIMAP_MARKER_RADIUS: f64 = 8.0;

// ── DOM ─────────────────────────────────────────────────────────

/// Elements that keep their own pointer behaviour; a press on them never starts a drag.
pub const INTERACTIVE_SELECTOR: &str = "button, a, input, textarea, iframe";
