//! Programmatic motion: eased interpolation between two camera positions.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::camera::Point;

/// Cubic ease-out: fast start, gentle landing. `t` is clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A fixed-duration eased move from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Point,
    pub to: Point,
    pub start_ms: f64,
    pub duration_ms: f64,
}

/// One sampled step of a [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub position: Point,
    /// Linear progress in `[0, 1]`; `1.0` means the tween is finished.
    pub progress: f64,
}

impl Tween {
    #[must_use]
    pub fn new(from: Point, to: Point, start_ms: f64, duration_ms: f64) -> Self {
        Self { from, to, start_ms, duration_ms }
    }

    /// Position at `now_ms`. The final sample lands exactly on `to`.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> TweenSample {
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let position = if progress >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, ease_out_cubic(progress))
        };
        TweenSample { position, progress }
    }
}
