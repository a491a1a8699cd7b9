//! Browser host: binds a [`NavigatorCore`] to the map element and the display refresh loop.
//!
//! ARCHITECTURE
//! ============
//! The core is pure and returns [`Action`]s; this module turns them into DOM
//! writes and `requestAnimationFrame` calls. The surrounding UI wires DOM
//! events to the `on_*` methods and listens for active-panel changes, which
//! arrive far less often than position updates.
//!
//! Exactly one frame callback is pending at a time. Its closure is kept in a
//! holder that the callback clears when it fires, or that `cancel_frame`
//! clears when the core drops the frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlElement, MouseEvent, TouchEvent};

use crate::camera::{Point, Size};
use crate::config::{ConfigError, NavigatorConfig};
use crate::consts::INTERACTIVE_SELECTOR;
use crate::engine::{Action, NavigatorCore, ObserverId};
use crate::input::PointerTarget;
use crate::minimap::MinimapProjection;
use crate::panels::{PanelRegistry, RegistryError};
use crate::render;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct PendingFrame {
    handle: i32,
    callback: FrameCallback,
}

struct HostInner {
    core: NavigatorCore,
    map: HtmlElement,
    pending: Option<PendingFrame>,
    on_active_panel: Option<Box<dyn FnMut(&str)>>,
}

/// The navigator as mounted in a page. Dropping it cancels any pending frame.
pub struct NavigatorHost {
    inner: Rc<RefCell<HostInner>>,
    viewport: Rc<Cell<Option<Size>>>,
}

impl NavigatorHost {
    /// Mount over `map`, measure the window and glide to the first panel.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] if `config` fails validation.
    pub fn mount(map: HtmlElement, config: NavigatorConfig, registry: PanelRegistry) -> Result<Self, HostError> {
        let host = Self {
            inner: Rc::new(RefCell::new(HostInner {
                core: NavigatorCore::try_new(config, registry)?,
                map,
                pending: None,
                on_active_panel: None,
            })),
            viewport: Rc::new(Cell::new(None)),
        };
        host.on_resize();
        let actions = host.inner.borrow_mut().core.mount(now_ms());
        apply(&host.inner, actions);
        Ok(host)
    }

    /// Mount with JSON config and an optional JSON panel list (reference layout when `None`).
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if either document is malformed or invalid.
    pub fn mount_with_json(map: HtmlElement, config: &str, panels: Option<&str>) -> Result<Self, HostError> {
        let config = NavigatorConfig::from_json(config)?;
        let registry = match panels {
            Some(raw) => PanelRegistry::from_json(raw)?,
            None => PanelRegistry::reference(),
        };
        Self::mount(map, config, registry)
    }

    /// Called with the new panel id whenever the highlighted panel changes.
    pub fn on_active_panel_change(&self, callback: impl FnMut(&str) + 'static) {
        self.inner.borrow_mut().on_active_panel = Some(Box::new(callback));
    }

    /// Keep a minimap viewport indicator in sync with the camera.
    pub fn attach_minimap(&self, indicator: HtmlElement) -> ObserverId {
        let mut inner = self.inner.borrow_mut();
        let projection = MinimapProjection::standard(inner.core.config().canvas());
        let viewport = Rc::clone(&self.viewport);
        inner.core.subscribe(move |position: Point| {
            let rect = projection.indicator(position, viewport.get());
            if let Err(err) = render::apply_indicator(&indicator, rect) {
                warn!("navigator: minimap update failed: {err:?}");
            }
        })
    }

    pub fn detach_minimap(&self, id: ObserverId) -> bool {
        self.inner.borrow_mut().core.unsubscribe(id)
    }

    // --- DOM events ---

    pub fn on_mouse_down(&self, ev: &MouseEvent) {
        let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        self.drag_start(pointer, pointer_target(ev));
    }

    pub fn on_mouse_move(&self, ev: &MouseEvent) {
        let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        self.drag_move(pointer);
    }

    /// Mouse up and mouse leave both end the drag.
    pub fn on_mouse_up(&self) {
        let actions = self.inner.borrow_mut().core.on_drag_end();
        apply(&self.inner, actions);
    }

    /// Only the first touch point is tracked.
    pub fn on_touch_start(&self, ev: &TouchEvent) {
        if let Some(pointer) = first_touch(ev) {
            self.drag_start(pointer, pointer_target(ev));
        }
    }

    pub fn on_touch_move(&self, ev: &TouchEvent) {
        if let Some(pointer) = first_touch(ev) {
            self.drag_move(pointer);
        }
    }

    pub fn on_touch_end(&self) {
        self.on_mouse_up();
    }

    /// Re-read the window size. Affects subsequent clamps only.
    pub fn on_resize(&self) {
        let Some((width, height)) = window_size() else {
            return;
        };
        self.viewport.set(Size::measured(width, height));
        self.inner.borrow_mut().core.set_viewport(width, height);
    }

    // --- Navigation ---

    pub fn navigate_to(&self, panel_id: &str) {
        let actions = self.inner.borrow_mut().core.navigate_to(panel_id, now_ms());
        apply(&self.inner, actions);
    }

    #[must_use]
    pub fn active_panel(&self) -> String {
        self.inner.borrow().core.active_panel().to_owned()
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.inner.borrow().core.position()
    }

    /// Stop motion and release the frame callback.
    pub fn unmount(&self) {
        let actions = self.inner.borrow_mut().core.cancel();
        apply(&self.inner, actions);
        cancel_frame(&self.inner);
    }

    fn drag_start(&self, pointer: Point, target: PointerTarget) {
        let actions = self.inner.borrow_mut().core.on_drag_start(pointer, target, now_ms());
        apply(&self.inner, actions);
    }

    fn drag_move(&self, pointer: Point) {
        let actions = self.inner.borrow_mut().core.on_drag_move(pointer, now_ms());
        apply(&self.inner, actions);
    }
}

impl Drop for NavigatorHost {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn apply(inner: &Rc<RefCell<HostInner>>, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::PositionChanged(position) => {
                if let Err(err) = render::apply_map_transform(&inner.borrow().map, position) {
                    warn!("navigator: transform update failed: {err:?}");
                }
            }
            Action::ActivePanelChanged(id) => {
                // Released while running so the callback may navigate.
                let callback = inner.borrow_mut().on_active_panel.take();
                if let Some(mut callback) = callback {
                    callback(&id);
                    let mut guard = inner.borrow_mut();
                    if guard.on_active_panel.is_none() {
                        guard.on_active_panel = Some(callback);
                    }
                }
            }
            Action::RequestFrame => request_frame(inner),
            Action::CancelFrame => cancel_frame(inner),
        }
    }
}

fn request_frame(inner: &Rc<RefCell<HostInner>>) {
    cancel_frame(inner);
    let Some(window) = web_sys::window() else {
        warn!("navigator: no window; stopping motion");
        stop_motion(inner);
        return;
    };

    let weak = Rc::downgrade(inner);
    let holder: FrameCallback = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if let Some(inner) = weak.upgrade() {
            inner.borrow_mut().pending = None;
            let actions = inner.borrow_mut().core.on_frame(ts);
            apply(&inner, actions);
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(handle) => {
            *holder.borrow_mut() = Some(cb);
            inner.borrow_mut().pending = Some(PendingFrame { handle, callback: holder });
        }
        Err(err) => {
            warn!("navigator: requestAnimationFrame failed: {err:?}");
            stop_motion(inner);
        }
    }
}

fn cancel_frame(inner: &Rc<RefCell<HostInner>>) {
    let pending = inner.borrow_mut().pending.take();
    let Some(pending) = pending else {
        return;
    };
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.cancel_animation_frame(pending.handle) {
            warn!("navigator: cancelAnimationFrame failed: {err:?}");
        }
    }
    pending.callback.borrow_mut().take();
}

fn stop_motion(inner: &Rc<RefCell<HostInner>>) {
    let actions = inner.borrow_mut().core.cancel();
    for action in actions {
        if action != Action::CancelFrame {
            warn!("navigator: unexpected action while stopping: {action:?}");
        }
    }
}

fn pointer_target(ev: &Event) -> PointerTarget {
    let Some(target) = ev.target() else {
        return PointerTarget::Surface;
    };
    let Some(element) = target.dyn_ref::<Element>() else {
        return PointerTarget::Surface;
    };
    match element.closest(INTERACTIVE_SELECTOR) {
        Ok(Some(_)) => PointerTarget::Interactive,
        Ok(None) | Err(_) => PointerTarget::Surface,
    }
}

fn first_touch(ev: &TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Window inner size in CSS pixels. `None` keeps the previous viewport.
fn window_size() -> Option<(f64, f64)> {
    let Some(window) = web_sys::window() else {
        warn!("navigator: no window; viewport not measured");
        return None;
    };
    let width = window.inner_width().map_or(None, |v| v.as_f64());
    let height = window.inner_height().map_or(None, |v| v.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Some((width, height)),
        _ => {
            warn!("navigator: window size unavailable; viewport not updated");
            None
        }
    }
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}
