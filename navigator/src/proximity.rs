//! Active-panel detection: which island is nearest the middle of the screen.

#[cfg(test)]
#[path = "proximity_test.rs"]
mod proximity_test;

use crate::camera::{Camera, Point};
use crate::panels::{Panel, PanelRegistry};

/// Return the panel whose content centre (`anchor + content_offset`) is closest
/// to the viewport centre when the camera sits at `position`.
///
/// Ties go to the panel listed first. Before the viewport is measured there is
/// no centre to measure from, so the first panel is returned.
#[must_use]
pub fn detect_active_panel<'a>(
    position: Point,
    camera: &Camera,
    registry: &'a PanelRegistry,
    content_offset: Point,
) -> &'a Panel {
    let mut closest = registry.first();
    let Some(center) = camera.viewport_center(position) else {
        return closest;
    };

    let mut min_distance = f64::INFINITY;
    for panel in registry.iter() {
        let distance = center.distance(panel.anchor().offset(content_offset));
        if distance < min_distance {
            min_distance = distance;
            closest = panel;
        }
    }
    closest
}

/// Time-based sampler: lets at most one call through per `interval_ms`.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last_ms: None }
    }

    /// Returns true (and records `now_ms`) if enough time has passed since the last accepted call.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        true
    }
}
