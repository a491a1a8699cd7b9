//! Navigator tuning parsed from a JSON document supplied by the host page.
//!
//! Every field is optional; missing fields fall back to the constants in
//! [`crate::consts`], so `{}` yields the reference deployment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, Size};
use crate::consts::{
    CANVAS_HEIGHT, CANVAS_WIDTH, CONTENT_OFFSET_X, CONTENT_OFFSET_Y, DAMPING, NAVIGATE_DURATION_MS, OVERSCROLL_PX,
    PANEL_THROTTLE_MS, STOP_THRESHOLD, TICK_MS,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid navigator config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("canvas size must be positive, got {width}x{height}")]
    CanvasSize { width: f64, height: f64 },
    #[error("damping must be in (0, 1), got {0}")]
    Damping(f64),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub overscroll: f64,
    pub damping: f64,
    pub stop_threshold: f64,
    pub tick_ms: f64,
    pub navigate_duration_ms: f64,
    pub panel_throttle_ms: f64,
    pub content_offset_x: f64,
    pub content_offset_y: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            overscroll: OVERSCROLL_PX,
            damping: DAMPING,
            stop_threshold: STOP_THRESHOLD,
            tick_ms: TICK_MS,
            navigate_duration_ms: NAVIGATE_DURATION_MS,
            panel_throttle_ms: PANEL_THROTTLE_MS,
            content_offset_x: CONTENT_OFFSET_X,
            content_offset_y: CONTENT_OFFSET_Y,
        }
    }
}

impl NavigatorConfig {
    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the controller relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::CanvasSize { width: self.canvas_width, height: self.canvas_height });
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::Damping(self.damping));
        }
        for (field, value) in [
            ("stop_threshold", self.stop_threshold),
            ("tick_ms", self.tick_ms),
            ("navigate_duration_ms", self.navigate_duration_ms),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn canvas(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    #[must_use]
    pub fn content_offset(&self) -> Point {
        Point::new(self.content_offset_x, self.content_offset_y)
    }
}
