use log::debug;

use crate::camera::{Camera, Point, Size, Velocity};
use crate::config::{ConfigError, NavigatorConfig};
use crate::input::{DragGesture, NavState, PointerTarget};
use crate::motion::Tween;
use crate::panels::{Panel, PanelRegistry};
use crate::proximity::{Throttle, detect_active_panel};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input and frame handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Camera moved; apply the new map transform.
    PositionChanged(Point),
    /// The highlighted panel changed. Emitted at most once per throttle window
    /// during drag/coast, immediately on `navigate_to`.
    ActivePanelChanged(String),
    /// Call [`NavigatorCore::on_frame`] on the next display refresh.
    RequestFrame,
    /// Drop the pending frame callback.
    CancelFrame,
}

/// Handle returned by [`NavigatorCore::subscribe`].
pub type ObserverId = u64;

type PositionObserver = Box<dyn FnMut(Point)>;

/// Core navigation state: all logic that does not depend on the DOM.
///
/// Separated from [`crate::host::NavigatorHost`] so it can be tested without
/// WASM/browser dependencies. Time is always supplied by the caller in
/// milliseconds on a single monotonic clock.
pub struct NavigatorCore {
    config: NavigatorConfig,
    registry: PanelRegistry,
    camera: Camera,
    velocity: Velocity,
    state: NavState,
    active_panel: String,
    throttle: Throttle,
    frame_scheduled: bool,
    observers: Vec<(ObserverId, PositionObserver)>,
    next_observer_id: ObserverId,
}

impl Default for NavigatorCore {
    fn default() -> Self {
        Self::new(NavigatorConfig::default(), PanelRegistry::reference())
    }
}

impl NavigatorCore {
    /// Build a core after checking `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`NavigatorConfig::validate`].
    pub fn try_new(config: NavigatorConfig, registry: PanelRegistry) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, registry))
    }

    /// Build a core without checking `config`. Callers pass a default or
    /// already validated config; use [`NavigatorCore::try_new`] otherwise.
    #[must_use]
    pub fn new(config: NavigatorConfig, registry: PanelRegistry) -> Self {
        let active_panel = registry.first().id.clone();
        Self {
            throttle: Throttle::new(config.panel_throttle_ms),
            config,
            registry,
            camera: Camera::default(),
            velocity: Velocity::default(),
            state: NavState::Idle,
            active_panel,
            frame_scheduled: false,
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    // --- Viewport / observers ---

    /// Record the measured viewport size. Non-positive sizes mean "not measured yet".
    ///
    /// Only affects later calls; an in-flight animation keeps its target.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.camera.viewport = Size::measured(width, height);
    }

    /// Register a callback invoked with every new camera position.
    pub fn subscribe(&mut self, observer: impl FnMut(Point) + 'static) -> ObserverId {
        let id = self.next_observer_id;
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    // --- Input events ---

    /// Pointer or first-touch press on the map.
    ///
    /// Presses on interactive children are not claimed and leave all state
    /// untouched, as does a second press (another finger) during a drag.
    pub fn on_drag_start(&mut self, pointer: Point, target: PointerTarget, now_ms: f64) -> Vec<Action> {
        if target == PointerTarget::Interactive || matches!(self.state, NavState::Dragging(_)) {
            return Vec::new();
        }
        let mut actions = Vec::new();
        self.cancel_frame(&mut actions);
        self.velocity = Velocity::default();
        self.transition(NavState::Dragging(DragGesture {
            anchor: pointer.minus(self.camera.position),
            last_pointer: pointer,
            last_ms: now_ms,
        }));
        actions
    }

    pub fn on_drag_move(&mut self, pointer: Point, now_ms: f64) -> Vec<Action> {
        let NavState::Dragging(mut drag) = self.state else {
            return Vec::new();
        };

        let dt = now_ms - drag.last_ms;
        if dt > 0.0 {
            self.velocity = Velocity::from_delta(pointer.minus(drag.last_pointer), dt, self.config.tick_ms);
        }
        drag.last_pointer = pointer;
        drag.last_ms = now_ms;
        self.state = NavState::Dragging(drag);

        let mut actions = Vec::new();
        let next = self.clamp(pointer.minus(drag.anchor));
        self.publish(next, &mut actions);
        self.refresh_active_throttled(now_ms, &mut actions);
        actions
    }

    /// Pointer/touch release or the pointer leaving the map.
    pub fn on_drag_end(&mut self) -> Vec<Action> {
        if !matches!(self.state, NavState::Dragging(_)) {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if self.velocity.is_settled(self.config.stop_threshold) {
            self.transition(NavState::Idle);
        } else {
            self.transition(NavState::Coasting);
            self.schedule_frame(&mut actions);
        }
        actions
    }

    // --- Frame-driven motion ---

    /// Display-refresh callback. Advances whichever motion source is active.
    pub fn on_frame(&mut self, now_ms: f64) -> Vec<Action> {
        self.frame_scheduled = false;
        match self.state {
            NavState::Coasting => self.coast_tick(now_ms),
            NavState::Animating(tween) => self.animation_step(tween, now_ms),
            NavState::Idle | NavState::Dragging(_) => Vec::new(),
        }
    }

    /// One step of inertial motion after release.
    pub fn coast_tick(&mut self, now_ms: f64) -> Vec<Action> {
        if !matches!(self.state, NavState::Coasting) {
            return Vec::new();
        }
        let mut actions = Vec::new();
        self.velocity = self.velocity.damped(self.config.damping);
        let next = self.clamp(self.camera.position.offset(self.velocity.as_point()));
        self.publish(next, &mut actions);
        self.refresh_active_throttled(now_ms, &mut actions);

        if self.velocity.is_settled(self.config.stop_threshold) {
            self.cancel_frame(&mut actions);
            self.transition(NavState::Idle);
        } else {
            self.schedule_frame(&mut actions);
        }
        actions
    }

    fn animation_step(&mut self, tween: Tween, now_ms: f64) -> Vec<Action> {
        let mut actions = Vec::new();
        let sample = tween.sample(now_ms);
        self.publish(sample.position, &mut actions);
        if sample.progress >= 1.0 {
            self.transition(NavState::Idle);
        } else {
            self.schedule_frame(&mut actions);
        }
        actions
    }

    // --- Programmatic navigation ---

    /// Glide to the panel with `panel_id`, centring its content in the viewport.
    ///
    /// Replaces any coast or animation in progress. The active panel switches
    /// immediately rather than when the camera arrives. Unknown ids are ignored.
    pub fn navigate_to(&mut self, panel_id: &str, now_ms: f64) -> Vec<Action> {
        let Some(panel) = self.registry.get(panel_id) else {
            debug!("navigator: ignoring navigation to unknown panel {panel_id:?}");
            return Vec::new();
        };
        let id = panel.id.clone();
        let focus = panel.anchor().offset(self.config.content_offset());
        let target = self.clamp(self.camera.centering(focus));

        let mut actions = Vec::new();
        self.cancel_frame(&mut actions);
        self.velocity = Velocity::default();
        self.transition(NavState::Animating(Tween::new(
            self.camera.position,
            target,
            now_ms,
            self.config.navigate_duration_ms,
        )));
        self.schedule_frame(&mut actions);
        self.set_active(id, &mut actions);
        actions
    }

    /// Initial landing: glide to the first panel.
    pub fn mount(&mut self, now_ms: f64) -> Vec<Action> {
        let first = self.registry.first().id.clone();
        self.navigate_to(&first, now_ms)
    }

    /// Stop all motion and drop any pending frame. Called on teardown.
    pub fn cancel(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.cancel_frame(&mut actions);
        self.velocity = Velocity::default();
        self.transition(NavState::Idle);
        actions
    }

    // --- Queries ---

    /// Panel nearest the viewport centre for a camera at `position`.
    #[must_use]
    pub fn detect_active_panel(&self, position: Point) -> &Panel {
        detect_active_panel(position, &self.camera, &self.registry, self.config.content_offset())
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.camera.position
    }

    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    #[must_use]
    pub fn active_panel(&self) -> &str {
        &self.active_panel
    }

    #[must_use]
    pub fn frame_scheduled(&self) -> bool {
        self.frame_scheduled
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    // --- Internals ---

    fn clamp(&self, position: Point) -> Point {
        self.camera.clamp(position, self.config.canvas(), self.config.overscroll)
    }

    fn publish(&mut self, position: Point, actions: &mut Vec<Action>) {
        self.camera.position = position;
        for (_, observer) in &mut self.observers {
            observer(position);
        }
        actions.push(Action::PositionChanged(position));
    }

    fn refresh_active_throttled(&mut self, now_ms: f64, actions: &mut Vec<Action>) {
        if !self.throttle.ready(now_ms) {
            return;
        }
        let closest = self.detect_active_panel(self.camera.position).id.clone();
        self.set_active(closest, actions);
    }

    fn set_active(&mut self, id: String, actions: &mut Vec<Action>) {
        if self.active_panel != id {
            self.active_panel.clone_from(&id);
            actions.push(Action::ActivePanelChanged(id));
        }
    }

    fn schedule_frame(&mut self, actions: &mut Vec<Action>) {
        if !self.frame_scheduled {
            self.frame_scheduled = true;
            actions.push(Action::RequestFrame);
        }
    }

    fn cancel_frame(&mut self, actions: &mut Vec<Action>) {
        if self.frame_scheduled {
            self.frame_scheduled = false;
            actions.push(Action::CancelFrame);
        }
    }

    fn transition(&mut self, next: NavState) {
        if self.state.label() != next.label() {
            debug!("navigator: {} -> {}", self.state.label(), next.label());
        }
        self.state = next;
    }
}
