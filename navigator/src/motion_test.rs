#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- ease_out_cubic ---

#[test]
fn ease_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
}

#[test]
fn ease_midpoint() {
    assert!(approx_eq(ease_out_cubic(0.5), 0.875));
}

#[test]
fn ease_clamps_out_of_range() {
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(3.0), 1.0);
}

#[test]
fn ease_is_monotonic() {
    let mut last = 0.0;
    for i in 1..=100 {
        let v = ease_out_cubic(f64::from(i) / 100.0);
        assert!(v > last);
        last = v;
    }
}

// --- Tween ---

#[test]
fn tween_starts_at_from() {
    let tween = Tween::new(Point::new(0.0, 0.0), Point::new(-100.0, 50.0), 1000.0, 800.0);
    let sample = tween.sample(1000.0);
    assert_eq!(sample.position, Point::new(0.0, 0.0));
    assert_eq!(sample.progress, 0.0);
}

#[test]
fn tween_halfway_uses_easing() {
    let tween = Tween::new(Point::new(0.0, 0.0), Point::new(-100.0, 40.0), 0.0, 800.0);
    let sample = tween.sample(400.0);
    assert!(approx_eq(sample.progress, 0.5));
    assert!(approx_eq(sample.position.x, -87.5));
    assert!(approx_eq(sample.position.y, 35.0));
}

#[test]
fn tween_ends_exactly_on_target() {
    let to = Point::new(-1960.0, -200.0);
    let tween = Tween::new(Point::new(-123.456, 78.9), to, 0.0, 800.0);
    let sample = tween.sample(800.0);
    assert_eq!(sample.position, to);
    assert_eq!(sample.progress, 1.0);
    assert_eq!(tween.sample(5000.0).position, to);
}

#[test]
fn tween_before_start_holds_origin() {
    let tween = Tween::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0), 100.0, 800.0);
    assert_eq!(tween.sample(50.0).position, Point::new(1.0, 2.0));
}

#[test]
fn zero_duration_finishes_immediately() {
    let tween = Tween::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 0.0, 0.0);
    let sample = tween.sample(0.0);
    assert_eq!(sample.progress, 1.0);
    assert_eq!(sample.position, Point::new(10.0, 10.0));
}
