//! Rendering: pushes camera positions into the DOM.
//!
//! This module is the only place that writes element styles. The map is moved
//! with a compositor-only `translate3d` transform so per-frame updates never
//! trigger layout.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::camera::Point;
use crate::minimap::Rect;

/// CSS transform placing the map at `position`.
#[must_use]
pub fn map_transform(position: Point) -> String {
    format!("translate3d({}px, {}px, 0)", position.x, position.y)
}

/// Inline style for the minimap viewport indicator.
#[must_use]
pub fn indicator_style(rect: Rect) -> String {
    format!(
        "width: {}px; height: {}px; transform: translate({}px, {}px)",
        rect.width, rect.height, rect.x, rect.y
    )
}

/// Apply the map transform to `map`.
///
/// # Errors
///
/// Returns `Err` if the browser rejects the style write.
pub fn apply_map_transform(map: &HtmlElement, position: Point) -> Result<(), JsValue> {
    map.style().set_property("transform", &map_transform(position))
}

/// Apply the indicator rectangle to the minimap overlay element.
///
/// # Errors
///
/// Returns `Err` if the browser rejects the style write.
pub fn apply_indicator(indicator: &HtmlElement, rect: Rect) -> Result<(), JsValue> {
    indicator.set_attribute("style", &indicator_style(rect))
}
