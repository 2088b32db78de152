use super::*;

// =============================================================================
// SwipeTracker::end
// =============================================================================

#[test]
fn end_without_begin_is_none() {
    let mut tracker = SwipeTracker::new();
    assert_eq!(tracker.end(200.0), None);
}

#[test]
fn drag_left_past_threshold_is_left() {
    let mut tracker = SwipeTracker::new();
    tracker.begin(300.0);
    assert_eq!(tracker.end(240.0), Some(SwipeDirection::Left));
}

#[test]
fn drag_right_past_threshold_is_right() {
    let mut tracker = SwipeTracker::new();
    tracker.begin(100.0);
    assert_eq!(tracker.end(180.0), Some(SwipeDirection::Right));
}

#[test]
fn displacement_at_threshold_is_none() {
    let mut tracker = SwipeTracker::new();
    tracker.begin(150.0);
    assert_eq!(tracker.end(100.0), None);
}

#[test]
fn displacement_just_past_threshold_registers() {
    let mut tracker = SwipeTracker::new();
    tracker.begin(151.0);
    assert_eq!(tracker.end(100.0), Some(SwipeDirection::Left));
}

#[test]
fn small_drag_is_none() {
    let mut tracker = SwipeTracker::new();
    tracker.begin(100.0);
    assert_eq!(tracker.end(110.0), None);
}

#[test]
fn gesture_is_consumed_by_end() {
    let mut tracker = SwipeTracker::new();
    tracker.begin(300.0);
    assert_eq!(tracker.end(100.0), Some(SwipeDirection::Left));
    assert_eq!(tracker.end(100.0), None);
}
