#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_reference_deployment() {
    let config = NavigatorConfig::default();
    assert_eq!(config.canvas(), Size::new(6500.0, 1600.0));
    assert_eq!(config.overscroll, 100.0);
    assert_eq!(config.damping, 0.92);
    assert_eq!(config.stop_threshold, 0.5);
    assert_eq!(config.tick_ms, 16.0);
    assert_eq!(config.navigate_duration_ms, 800.0);
    assert_eq!(config.panel_throttle_ms, 100.0);
    assert_eq!(config.content_offset(), Point::new(200.0, 250.0));
}

#[test]
fn empty_object_yields_defaults() {
    let config = NavigatorConfig::from_json("{}").unwrap();
    assert_eq!(config, NavigatorConfig::default());
}

#[test]
fn partial_object_overrides_only_given_fields() {
    let config = NavigatorConfig::from_json(r#"{"canvas_width": 8000, "damping": 0.8}"#).unwrap();
    assert_eq!(config.canvas_width, 8000.0);
    assert_eq!(config.damping, 0.8);
    assert_eq!(config.canvas_height, 1600.0);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = NavigatorConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_canvas_rejected() {
    let err = NavigatorConfig::from_json(r#"{"canvas_height": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::CanvasSize { .. }));
}

#[test]
fn damping_of_one_rejected() {
    let err = NavigatorConfig::from_json(r#"{"damping": 1.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Damping(d) if d == 1.0));
}

#[test]
fn negative_duration_rejected() {
    let err = NavigatorConfig::from_json(r#"{"navigate_duration_ms": -5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositive { field: "navigate_duration_ms", .. }));
}

#[test]
fn error_messages_name_the_problem() {
    let err = NavigatorConfig::from_json(r#"{"tick_ms": 0}"#).unwrap_err();
    assert_eq!(err.to_string(), "tick_ms must be positive, got 0");
}
