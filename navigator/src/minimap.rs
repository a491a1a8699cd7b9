//! Minimap projection: scales canvas coordinates into the corner overview.
//!
//! The minimap subscribes to camera positions directly (see
//! [`crate::engine::NavigatorCore::subscribe`]) and only needs this maths to
//! place its viewport indicator, so per-frame updates stay cheap.

#[cfg(test)]
#[path = "minimap_test.rs"]
mod minimap_test;

use crate::camera::{Point, Size};
use crate::consts::{MINIMAP_HEIGHT, MINIMAP_MARKER_RADIUS, MINIMAP_WIDTH};
use crate::panels::Panel;

/// Axis-aligned rectangle in minimap pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapProjection {
    pub size: Size,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl MinimapProjection {
    #[must_use]
    pub fn new(canvas: Size, minimap: Size) -> Self {
        Self { size: minimap, scale_x: minimap.width / canvas.width, scale_y: minimap.height / canvas.height }
    }

    /// Projection onto the standard 200x150 minimap.
    #[must_use]
    pub fn standard(canvas: Size) -> Self {
        Self::new(canvas, Size::new(MINIMAP_WIDTH, MINIMAP_HEIGHT))
    }

    /// Canvas point to minimap point.
    #[must_use]
    pub fn project(&self, point: Point) -> Point {
        Point::new(point.x * self.scale_x, point.y * self.scale_y)
    }

    /// Top-left of the marker dot for `panel`, centred on its anchor.
    #[must_use]
    pub fn marker(&self, panel: &Panel) -> Point {
        let at = self.project(panel.anchor());
        Point::new(at.x - MINIMAP_MARKER_RADIUS, at.y - MINIMAP_MARKER_RADIUS)
    }

    /// Rectangle showing the visible part of the canvas for a camera at `position`.
    ///
    /// An unmeasured viewport yields a zero-sized indicator at the right spot.
    #[must_use]
    pub fn indicator(&self, position: Point, viewport: Option<Size>) -> Rect {
        let viewport = viewport.unwrap_or(Size::new(0.0, 0.0));
        Rect {
            x: -position.x * self.scale_x,
            y: -position.y * self.scale_y,
            width: viewport.width * self.scale_x,
            height: viewport.height * self.scale_y,
        }
    }
}
