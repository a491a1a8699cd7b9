//! Viewport navigation for the portfolio island map.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! camera over a large virtual canvas of fixed "island" panels: pointer and
//! touch drag, inertial coasting after release, eased navigation to a panel,
//! bounds clamping, and detection of the panel nearest the screen centre. The
//! host page only wires DOM events to [`host::NavigatorHost`] and renders
//! panel content.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::NavigatorCore`] and the [`engine::Action`]s it emits |
//! | [`host`] | DOM and `requestAnimationFrame` binding |
//! | [`camera`] | Points, sizes, velocity and bounds clamping |
//! | [`input`] | Press classification and the navigation state machine |
//! | [`motion`] | Eased tweens for programmatic navigation |
//! | [`panels`] | The immutable panel registry |
//! | [`proximity`] | Active-panel detection and its throttle |
//! | [`minimap`] | Canvas-to-minimap projection |
//! | [`render`] | CSS transform output |
//! | [`config`] | JSON tuning with defaults |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod host;
pub mod input;
pub mod minimap;
pub mod motion;
pub mod panels;
pub mod proximity;
pub mod render;

/// Route `log` output to the browser console and install the panic hook.
///
/// Returns false if a logger was already installed.
pub fn init_logging(level: log::Level) -> bool {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level).is_ok()
}
