//! Single-shot pan gesture analysis.
//!
//! [`analyze_pan_gesture`] looks at a finished sample sequence and either
//! describes the pan or says why it does not qualify. Rejection is an ordinary
//! outcome; nothing here returns an error.

use std::fmt;

use gestura_core::TimestampMs;
use gestura_geometry::{direction, distance, Direction, Point};

use crate::config::GestureConfig;
use crate::sample::TimestampedSample;
use crate::velocity::{average_velocity, estimate_velocity, step_velocities};

/// Characteristics of an accepted pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    /// Release velocity over the configured window (px/ms).
    pub velocity: Point,
    /// Straight-line distance from first to last sample.
    pub distance: f32,
    pub duration_ms: i64,
    pub direction: Direction,
    pub should_inertia: bool,
    /// Mean of the non-zero step velocities over the trailing history.
    pub average_velocity: Point,
    /// Last sample minus first sample.
    pub translation: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RejectReason {
    InsufficientEvents,
    DistanceTooSmall { distance: f32, min: f32 },
    DurationTooShort { duration_ms: i64, min_ms: i64 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InsufficientEvents => f.write_str("Insufficient events"),
            RejectReason::DistanceTooSmall { distance, min } => {
                write!(f, "Distance too small: {distance} < {min}")
            }
            RejectReason::DurationTooShort {
                duration_ms,
                min_ms,
            } => write!(f, "Duration too short: {duration_ms}ms < {min_ms}ms"),
        }
    }
}

/// Outcome of [`analyze_pan_gesture`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureAnalysis {
    Valid(PanGesture),
    Rejected(RejectReason),
}

impl GestureAnalysis {
    pub fn is_valid(&self) -> bool {
        matches!(self, GestureAnalysis::Valid(_))
    }

    pub fn gesture(&self) -> Option<&PanGesture> {
        match self {
            GestureAnalysis::Valid(gesture) => Some(gesture),
            GestureAnalysis::Rejected(_) => None,
        }
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            GestureAnalysis::Valid(_) => None,
            GestureAnalysis::Rejected(reason) => Some(*reason),
        }
    }

    /// Human-readable rejection message; `None` for a valid pan.
    pub fn reason(&self) -> Option<String> {
        self.reject_reason().map(|reason| reason.to_string())
    }

    pub fn into_gesture(self) -> Option<PanGesture> {
        match self {
            GestureAnalysis::Valid(gesture) => Some(gesture),
            GestureAnalysis::Rejected(_) => None,
        }
    }
}

/// Classifies a complete pointer sequence as a pan.
///
/// Checks run in a fixed order and the first failure is reported: too few
/// samples, then distance, then duration. `now_ms` ends the velocity window
/// when `config.velocity_anchor` is [`VelocityAnchor::CallTime`](crate::VelocityAnchor::CallTime).
pub fn analyze_pan_gesture(
    samples: &[TimestampedSample],
    config: &GestureConfig,
    now_ms: TimestampMs,
) -> GestureAnalysis {
    let analysis = classify(samples, config, now_ms);
    if let GestureAnalysis::Rejected(reason) = &analysis {
        log::debug!("pan rejected after {} samples: {reason}", samples.len());
    }
    analysis
}

fn classify(
    samples: &[TimestampedSample],
    config: &GestureConfig,
    now_ms: TimestampMs,
) -> GestureAnalysis {
    let (start, end) = match samples {
        [first, .., last] => (first, last),
        _ => return GestureAnalysis::Rejected(RejectReason::InsufficientEvents),
    };

    let start_position = start.position();
    let end_position = end.position();
    let travelled = distance(start_position, end_position);
    let duration_ms = end.timestamp.saturating_sub(start.timestamp);
    let direction = direction(start_position, end_position);

    if travelled < config.min_distance {
        return GestureAnalysis::Rejected(RejectReason::DistanceTooSmall {
            distance: travelled,
            min: config.min_distance,
        });
    }
    // A pan must span time even when the configured minimum is zero.
    if duration_ms < config.min_duration_ms || duration_ms <= 0 {
        return GestureAnalysis::Rejected(RejectReason::DurationTooShort {
            duration_ms,
            min_ms: config.min_duration_ms,
        });
    }

    let velocity = estimate_velocity(
        samples,
        config.velocity_window_ms,
        config.velocity_anchor,
        now_ms,
    );

    let history_start = samples.len().saturating_sub(config.max_event_history);
    let steps: Vec<Point> = step_velocities(&samples[history_start..])
        .into_iter()
        .filter(|step| !step.is_zero())
        .collect();
    let average_velocity = average_velocity(&steps);

    let should_inertia = velocity.magnitude() > config.inertia_threshold;

    GestureAnalysis::Valid(PanGesture {
        velocity,
        distance: travelled,
        duration_ms,
        direction,
        should_inertia,
        average_velocity,
        translation: end_position - start_position,
    })
}

#[cfg(test)]
#[path = "tests/pan_tests.rs"]
mod tests;
