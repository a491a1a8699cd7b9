#![allow(clippy::float_cmp)]

use super::*;
use crate::panels::PanelRegistry;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn projection() -> MinimapProjection {
    MinimapProjection::standard(Size::new(6500.0, 1600.0))
}

#[test]
fn standard_scale() {
    let p = projection();
    assert!(approx_eq(p.scale_x, 200.0 / 6500.0));
    assert!(approx_eq(p.scale_y, 150.0 / 1600.0));
    assert_eq!(p.size, Size::new(200.0, 150.0));
}

#[test]
fn canvas_corners_map_to_minimap_corners() {
    let p = projection();
    let corner = p.project(Point::new(6500.0, 1600.0));
    assert!(approx_eq(corner.x, 200.0));
    assert!(approx_eq(corner.y, 150.0));
}

#[test]
fn marker_centred_on_anchor() {
    let registry = PanelRegistry::reference();
    let blog = registry.get("blog").unwrap();
    let marker = projection().marker(blog);
    assert!(approx_eq(marker.x, 2400.0 * 200.0 / 6500.0 - 8.0));
    assert!(approx_eq(marker.y, 350.0 * 150.0 / 1600.0 - 8.0));
}

#[test]
fn indicator_follows_negated_position() {
    let rect = projection().indicator(Point::new(-1300.0, -320.0), Some(Size::new(1280.0, 800.0)));
    assert!(approx_eq(rect.x, 40.0));
    assert!(approx_eq(rect.y, 30.0));
    assert!(approx_eq(rect.width, 1280.0 * 200.0 / 6500.0));
    assert!(approx_eq(rect.height, 75.0));
}

#[test]
fn indicator_without_viewport_is_zero_sized() {
    let rect = projection().indicator(Point::new(-650.0, 0.0), None);
    assert!(approx_eq(rect.x, 20.0));
    assert_eq!(rect.width, 0.0);
    assert_eq!(rect.height, 0.0);
}
