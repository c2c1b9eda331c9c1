//! Builders for pointer sample sequences used across the test suites.

use gestura_core::TimestampMs;
use gestura_foundation::{MultiTouchFrame, TimestampedSample};
use gestura_geometry::Point;

pub fn sample(x: f32, y: f32, timestamp: TimestampMs) -> TimestampedSample {
    TimestampedSample::new(x, y, timestamp)
}

/// `steps + 1` evenly spaced samples moving in a straight line from `start`
/// to `end`, one every `step_ms` starting at `start_ms`.
pub fn linear_drag(
    start: Point,
    end: Point,
    start_ms: TimestampMs,
    step_ms: TimestampMs,
    steps: usize,
) -> Vec<TimestampedSample> {
    if steps == 0 {
        return vec![TimestampedSample::at(start, start_ms)];
    }
    (0..=steps)
        .map(|i| {
            let fraction = i as f32 / steps as f32;
            let position = start + (end - start) * fraction;
            TimestampedSample::at(position, start_ms + step_ms * i as i64)
        })
        .collect()
}

/// A two-pointer frame with both pointers stamped at `timestamp`.
pub fn two_finger_frame(a: Point, b: Point, timestamp: TimestampMs) -> MultiTouchFrame {
    MultiTouchFrame::pair(
        TimestampedSample::at(a, timestamp),
        TimestampedSample::at(b, timestamp),
        timestamp,
    )
}
