#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A point in canvas or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    #[must_use]
    pub fn offset(self, by: Point) -> Self {
        Self { x: self.x + by.x, y: self.y + by.y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn minus(self, other: Point) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation toward `to` by `t` (0.0 = self, 1.0 = `to`).
    #[must_use]
    pub fn lerp(self, to: Point, t: f64) -> Self {
        Self { x: self.x + (to.x - self.x) * t, y: self.y + (to.y - self.y) * t }
    }
}

/// Width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size is only usable for layout maths once both sides are positive.
    #[must_use]
    pub fn measured(width: f64, height: f64) -> Option<Self> {
        (width > 0.0 && height > 0.0).then_some(Self { width, height })
    }

    #[must_use]
    pub fn half(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Per-tick velocity of the viewport, in pixels per 16 ms tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Velocity {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Velocity from a pointer delta observed over `dt_ms`, normalised to `tick_ms`.
    #[must_use]
    pub fn from_delta(delta: Point, dt_ms: f64, tick_ms: f64) -> Self {
        let scale = tick_ms / dt_ms;
        Self { dx: delta.x * scale, dy: delta.y * scale }
    }

    #[must_use]
    pub fn damped(self, factor: f64) -> Self {
        Self { dx: self.dx * factor, dy: self.dy * factor }
    }

    /// True when both components are strictly below `threshold` in magnitude.
    #[must_use]
    pub fn is_settled(self, threshold: f64) -> bool {
        self.dx.abs() < threshold && self.dy.abs() < threshold
    }

    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    #[must_use]
    pub fn as_point(self) -> Point {
        Point::new(self.dx, self.dy)
    }
}

/// Camera over the virtual canvas.
///
/// `position` is the translation applied to the canvas, so panning right
/// makes `x` more negative. `viewport` is `None` until the host has measured
/// the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub position: Point,
    pub viewport: Option<Size>,
}

impl Camera {
    /// Canvas-space point under the centre of the viewport.
    ///
    /// Returns `None` while the viewport is unmeasured.
    #[must_use]
    pub fn viewport_center(&self, position: Point) -> Option<Point> {
        let half = self.viewport?.half();
        Some(Point::new(-position.x + half.x, -position.y + half.y))
    }

    /// Camera position that puts the canvas point `target` in the middle of the viewport.
    ///
    /// Without a measured viewport the point is aligned with the top-left corner instead.
    #[must_use]
    pub fn centering(&self, target: Point) -> Point {
        let half = self.viewport.map_or_else(Point::default, Size::half);
        Point::new(-(target.x - half.x), -(target.y - half.y))
    }

    /// Clamp `position` to the canvas bounds for the current viewport.
    #[must_use]
    pub fn clamp(&self, position: Point, canvas: Size, overscroll: f64) -> Point {
        clamp_position(position, canvas, self.viewport, overscroll)
    }
}

/// Keep the viewport within the canvas, allowing `overscroll` pixels past each edge.
///
/// `x' = min(max(x, -(W - vw + overscroll)), overscroll)` and likewise for `y`.
/// An unmeasured viewport passes the position through untouched.
#[must_use]
pub fn clamp_position(position: Point, canvas: Size, viewport: Option<Size>, overscroll: f64) -> Point {
    let Some(viewport) = viewport else {
        return position;
    };
    let min_x = -(canvas.width - viewport.width + overscroll);
    let min_y = -(canvas.height - viewport.height + overscroll);
    Point::new(position.x.max(min_x).min(overscroll), position.y.max(min_y).min(overscroll))
}
