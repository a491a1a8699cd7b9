//! Input model: what a press landed on, and the navigation state machine.
//!
//! `NavState` is the single source of truth for which motion source (if any)
//! is driving the camera. Each active variant carries the context needed to
//! advance it, so there is no separate drag/animation bookkeeping elsewhere.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::motion::Tween;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerTarget {
    /// The map surface itself (or any non-interactive content on it).
    #[default]
    Surface,
    /// A button, link, form field or embedded frame. Never starts a drag.
    Interactive,
}

impl PointerTarget {
    /// Classify a press by the tag name of the element it hit and of its ancestors.
    ///
    /// Mirrors `Element::closest(INTERACTIVE_SELECTOR)` for hosts that only
    /// have tag names to hand.
    #[must_use]
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        if tags.into_iter().any(is_interactive_tag) {
            Self::Interactive
        } else {
            Self::Surface
        }
    }
}

/// Whether an element with this tag name handles its own pointer input.
#[must_use]
pub fn is_interactive_tag(tag: &str) -> bool {
    ["button", "a", "input", "textarea", "iframe"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag))
}

/// Context captured while the user drags the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Pointer position minus camera position at drag start.
    pub anchor: Point,
    /// Pointer position at the previous event, for velocity sampling.
    pub last_pointer: Point,
    /// Timestamp of the previous event in milliseconds.
    pub last_ms: f64,
}

/// Navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NavState {
    /// Nothing is moving the camera.
    #[default]
    Idle,
    /// A pointer or the first touch is dragging the map.
    Dragging(DragGesture),
    /// Released with speed; velocity decays every frame.
    Coasting,
    /// Eased navigation toward a panel.
    Animating(Tween),
}

impl NavState {
    /// Short label for logs and host telemetry.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
            Self::Coasting => "coasting",
            Self::Animating(_) => "animating",
        }
    }

    /// Whether this state needs per-frame callbacks.
    #[must_use]
    pub fn is_in_motion(&self) -> bool {
        matches!(self, Self::Coasting | Self::Animating(_))
    }
}
