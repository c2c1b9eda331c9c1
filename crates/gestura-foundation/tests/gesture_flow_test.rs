//! End-to-end checks of the analysis surface as an input handler drives it.

use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;

use gestura_foundation::prelude::*;
use gestura_foundation::{velocity_at, RejectReason};
use gestura_testing::{linear_drag, sample, two_finger_frame, ManualClock};

const T: i64 = 1_700_000_000_000;

#[test]
fn velocity_of_two_samples_inside_default_window() {
    let samples = [sample(0.0, 0.0, T), sample(100.0, 50.0, T + 100)];
    assert_eq!(velocity_at(&samples, 100, T + 100), Point::new(1.0, 0.5));
}

#[test]
fn fast_drag_through_tracker_qualifies_for_inertia() {
    let clock = Rc::new(ManualClock::new(T));
    let mut tracker = PanTracker::new(Rc::clone(&clock), GestureConfig::default())
        .expect("default config is valid");

    for s in linear_drag(Point::ZERO, Point::new(300.0, 30.0), T, 16, 12) {
        tracker.record(s);
    }
    clock.set(T + 16 * 12);

    let analysis = tracker.finish();
    let gesture = analysis.gesture().expect("valid pan");
    assert_eq!(gesture.direction, Direction::Horizontal);
    assert_eq!(gesture.duration_ms, 192);
    assert!(gesture.should_inertia);
    assert!(gesture.velocity.x > 1.0);
    assert!(gesture.average_velocity.x > 1.0);
}

#[test]
fn short_nudge_is_rejected_before_duration_is_checked() {
    let samples = linear_drag(Point::ZERO, Point::new(2.0, 2.0), T, 5, 2);
    let config = GestureConfig::default().with_min_duration(100);
    let analysis = analyze_pan_gesture(&samples, &config, T + 10);
    assert!(matches!(
        analysis.reject_reason(),
        Some(RejectReason::DistanceTooSmall { .. })
    ));
}

#[test]
fn two_finger_sequences_classify() {
    let pinch = [
        two_finger_frame(Point::new(0.0, 0.0), Point::new(100.0, 0.0), T),
        two_finger_frame(Point::new(-50.0, 0.0), Point::new(150.0, 0.0), T + 100),
    ];
    assert_eq!(
        detect_multi_touch(&pinch, &MultiTouchConfig::default()),
        MultiTouchGesture::Pinch { scale: 2.0 }
    );

    let rotate = [
        two_finger_frame(Point::new(-50.0, 0.0), Point::new(50.0, 0.0), T),
        two_finger_frame(Point::new(0.0, -50.0), Point::new(0.0, 50.0), T + 100),
    ];
    match detect_multi_touch(&rotate, &MultiTouchConfig::default()) {
        MultiTouchGesture::Rotate { rotation } => assert!((rotation - FRAC_PI_2).abs() < 1e-5),
        other => panic!("expected rotate, got {other:?}"),
    }
}

#[test]
fn single_pointer_frames_never_classify() {
    let frames = [
        MultiTouchFrame::new([sample(0.0, 0.0, T)], T),
        MultiTouchFrame::new([sample(80.0, 0.0, T + 50)], T + 50),
    ];
    assert_eq!(
        detect_multi_touch(&frames, &MultiTouchConfig::default()),
        MultiTouchGesture::None
    );
}
