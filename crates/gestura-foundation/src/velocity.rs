//! Windowed finite-difference velocity estimation.
//!
//! All velocities are in pixels per millisecond. None of these functions read
//! the wall clock: the end of the velocity window is always passed in, so the
//! same samples and the same `now_ms` always give the same answer.

use gestura_core::TimestampMs;
use gestura_geometry::Point;

use crate::config::VelocityAnchor;
use crate::sample::TimestampedSample;

/// Velocity between the first and last samples stamped at or after
/// `now_ms - window_ms`.
///
/// Returns zero for fewer than two samples in the window, and when the
/// bracketing samples share a timestamp.
pub fn velocity_at(samples: &[TimestampedSample], window_ms: i64, now_ms: TimestampMs) -> Point {
    if samples.len() < 2 {
        return Point::ZERO;
    }

    let cutoff = now_ms.saturating_sub(window_ms);
    let mut recent = samples.iter().filter(|sample| sample.timestamp >= cutoff);
    let (Some(first), Some(last)) = (recent.next(), recent.last()) else {
        return Point::ZERO;
    };
    finite_difference(first, last)
}

/// Like [`velocity_at`] with the window ending at the newest sample.
pub fn velocity_trailing(samples: &[TimestampedSample], window_ms: i64) -> Point {
    match samples.last() {
        Some(last) => velocity_at(samples, window_ms, last.timestamp),
        None => Point::ZERO,
    }
}

/// Dispatches on `anchor`; `now_ms` is ignored for [`VelocityAnchor::LatestSample`].
pub fn estimate_velocity(
    samples: &[TimestampedSample],
    window_ms: i64,
    anchor: VelocityAnchor,
    now_ms: TimestampMs,
) -> Point {
    match anchor {
        VelocityAnchor::CallTime => velocity_at(samples, window_ms, now_ms),
        VelocityAnchor::LatestSample => velocity_trailing(samples, window_ms),
    }
}

/// Instantaneous velocity of every consecutive pair. Pairs with no elapsed
/// time, or a gap too wide to represent, yield zero.
pub fn step_velocities(samples: &[TimestampedSample]) -> Vec<Point> {
    samples
        .windows(2)
        .map(|pair| finite_difference(&pair[0], &pair[1]))
        .collect()
}

/// Per-axis arithmetic mean; zero for an empty slice.
pub fn average_velocity(velocities: &[Point]) -> Point {
    if velocities.is_empty() {
        return Point::ZERO;
    }
    let sum = velocities
        .iter()
        .fold(Point::ZERO, |acc, velocity| acc + *velocity);
    sum / velocities.len() as f32
}

fn finite_difference(from: &TimestampedSample, to: &TimestampedSample) -> Point {
    let dt = match to.timestamp.checked_sub(from.timestamp) {
        Some(dt) if dt != 0 => dt,
        _ => return Point::ZERO,
    };
    let dt = dt as f32;
    Point::new((to.x - from.x) / dt, (to.y - from.y) / dt)
}
