use super::*;
use crate::pan::RejectReason;
use std::cell::Cell;
use std::rc::Rc;

const T: i64 = 50_000;

#[derive(Debug, Default)]
struct StepClock {
    now: Cell<i64>,
}

impl StepClock {
    fn at(now: i64) -> Rc<Self> {
        Rc::new(Self {
            now: Cell::new(now),
        })
    }

    fn advance(&self, delta: i64) {
        self.now.set(self.now.get() + delta);
    }

    fn set_to(&self, now: i64) {
        self.now.set(now);
    }
}

impl Clock for StepClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

fn frame(a: (f32, f32), b: (f32, f32), t: i64) -> MultiTouchFrame {
    MultiTouchFrame::pair(
        TimestampedSample::new(a.0, a.1, t),
        TimestampedSample::new(b.0, b.1, t),
        t,
    )
}

#[test]
fn invalid_config_is_rejected() {
    let err = PanTracker::new(
        StepClock::at(T),
        GestureConfig::default().with_velocity_window(-1),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveWindow { window_ms: -1 });
}

#[test]
fn tracker_keeps_the_config_it_was_built_with() {
    let config = GestureConfig::default()
        .with_min_distance(12.0)
        .with_max_event_history(4);
    let tracker = PanTracker::new(StepClock::at(T), config).unwrap();
    assert_eq!(tracker.config(), &config);
}

#[test]
fn records_with_clock_and_finishes_a_pan() {
    let clock = StepClock::at(T);
    let mut tracker = PanTracker::new(Rc::clone(&clock), GestureConfig::default()).unwrap();

    for i in 0..=5 {
        tracker.record_position(Point::new(i as f32 * 20.0, 0.0));
        if i < 5 {
            clock.advance(20);
        }
    }
    assert_eq!(tracker.len(), 6);

    let analysis = tracker.finish();
    let gesture = analysis.gesture().expect("valid pan");
    assert_eq!(gesture.duration_ms, 100);
    assert_eq!(gesture.distance, 100.0);
    assert_eq!(gesture.velocity, Point::new(1.0, 0.0));
    assert!(gesture.should_inertia);
    assert!(tracker.is_empty(), "finish clears the buffer");
}

#[test]
fn rolled_over_history_keeps_the_press_sample() {
    let clock = StepClock::at(T);
    let config = GestureConfig::default().with_max_event_history(3);
    let mut tracker = PanTracker::new(Rc::clone(&clock), config).unwrap();

    for i in 0..10 {
        tracker.record(TimestampedSample::new(i as f32 * 10.0, 0.0, T + i * 10));
    }
    clock.set_to(T + 90);

    let samples = tracker.samples();
    assert_eq!(samples.len(), 4);
    assert_eq!(samples[0], TimestampedSample::new(0.0, 0.0, T));
    assert_eq!(samples[1].timestamp, T + 70);

    let gesture = tracker.analyze().into_gesture().expect("valid pan");
    assert_eq!(gesture.distance, 90.0);
    assert_eq!(gesture.duration_ms, 90);
}

#[test]
fn late_finish_reads_clock_at_release() {
    let clock = StepClock::at(T);
    let mut tracker = PanTracker::new(Rc::clone(&clock), GestureConfig::default()).unwrap();
    tracker.record(TimestampedSample::new(0.0, 0.0, T));
    tracker.record(TimestampedSample::new(100.0, 0.0, T + 100));

    clock.set_to(T + 1_000);
    let gesture = tracker.finish().into_gesture().expect("valid pan");
    assert_eq!(gesture.velocity, Point::ZERO);
    assert!(!gesture.should_inertia);
}

#[test]
fn single_tap_is_insufficient() {
    let mut tracker = PanTracker::new(StepClock::at(T), GestureConfig::default()).unwrap();
    tracker.record(TimestampedSample::new(5.0, 5.0, T));
    assert_eq!(
        tracker.finish().reject_reason(),
        Some(RejectReason::InsufficientEvents)
    );
}

#[test]
fn multi_touch_tracker_compares_first_and_latest_frame() {
    let mut tracker = MultiTouchTracker::with_capacity(MultiTouchConfig::default(), 2).unwrap();
    assert!(tracker.classify().is_none());

    tracker.record(frame((0.0, 0.0), (100.0, 0.0), 0));
    tracker.record(frame((-10.0, 0.0), (110.0, 0.0), 16));
    tracker.record(frame((-30.0, 0.0), (130.0, 0.0), 32));
    tracker.record(frame((-50.0, 0.0), (150.0, 0.0), 48));
    assert_eq!(tracker.len(), 3);

    assert_eq!(tracker.classify(), MultiTouchGesture::Pinch { scale: 2.0 });

    tracker.reset();
    assert!(tracker.is_empty());
}

#[test]
fn multi_touch_tracker_rejects_zero_capacity() {
    assert_eq!(
        MultiTouchTracker::with_capacity(MultiTouchConfig::default(), 0).unwrap_err(),
        ConfigError::HistoryTooShort { history: 0 }
    );
}
