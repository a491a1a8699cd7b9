use super::*;

// =============================================================
// PointerTarget
// =============================================================

#[test]
fn default_target_is_surface() {
    assert_eq!(PointerTarget::default(), PointerTarget::Surface);
}

#[test]
fn interactive_tags_recognised_case_insensitively() {
    for tag in ["button", "A", "INPUT", "textarea", "IFrame"] {
        assert!(is_interactive_tag(tag), "{tag} should be interactive");
    }
}

#[test]
fn plain_tags_not_interactive() {
    for tag in ["div", "span", "img", "section", "p"] {
        assert!(!is_interactive_tag(tag), "{tag} should not be interactive");
    }
}

#[test]
fn from_tags_checks_ancestors() {
    assert_eq!(PointerTarget::from_tags(["span", "a", "div"]), PointerTarget::Interactive);
    assert_eq!(PointerTarget::from_tags(["svg", "div", "main"]), PointerTarget::Surface);
    assert_eq!(PointerTarget::from_tags([]), PointerTarget::Surface);
}

// =============================================================
// NavState
// =============================================================

#[test]
fn default_state_is_idle() {
    assert_eq!(NavState::default(), NavState::Idle);
}

#[test]
fn labels() {
    let drag = DragGesture { anchor: Point::default(), last_pointer: Point::default(), last_ms: 0.0 };
    let tween = Tween::new(Point::default(), Point::new(1.0, 1.0), 0.0, 800.0);
    assert_eq!(NavState::Idle.label(), "idle");
    assert_eq!(NavState::Dragging(drag).label(), "dragging");
    assert_eq!(NavState::Coasting.label(), "coasting");
    assert_eq!(NavState::Animating(tween).label(), "animating");
}

#[test]
fn only_coast_and_animation_need_frames() {
    let drag = DragGesture { anchor: Point::default(), last_pointer: Point::default(), last_ms: 0.0 };
    let tween = Tween::new(Point::default(), Point::new(1.0, 1.0), 0.0, 800.0);
    assert!(!NavState::Idle.is_in_motion());
    assert!(!NavState::Dragging(drag).is_in_motion());
    assert!(NavState::Coasting.is_in_motion());
    assert!(NavState::Animating(tween).is_in_motion());
}
