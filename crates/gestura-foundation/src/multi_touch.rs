//! Two-pointer gesture classification.

use std::fmt;

use gestura_geometry::{angle, distance, midpoint, Point};

use crate::config::MultiTouchConfig;
use crate::sample::MultiTouchFrame;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MultiTouchGesture {
    None,
    /// Ratio of final to initial pointer spread.
    Pinch { scale: f32 },
    /// Change of the pointer-to-pointer angle in radians. Not wrapped, so a
    /// pair that crosses the `atan2` branch cut can report more than π.
    Rotate { rotation: f32 },
    /// Movement of the pointers' midpoint.
    Pan { translation: Point },
}

impl MultiTouchGesture {
    pub fn is_none(&self) -> bool {
        matches!(self, MultiTouchGesture::None)
    }
}

impl fmt::Display for MultiTouchGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiTouchGesture::None => f.write_str("none"),
            MultiTouchGesture::Pinch { scale } => write!(f, "pinch x{scale:.3}"),
            MultiTouchGesture::Rotate { rotation } => write!(f, "rotate {rotation:.3}rad"),
            MultiTouchGesture::Pan { translation } => {
                write!(f, "pan ({:.1}, {:.1})", translation.x, translation.y)
            }
        }
    }
}

/// Raw measurements between the first and last frame, before classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MultiTouchMetrics {
    pub scale: f32,
    pub rotation: f32,
    pub translation: Point,
    pub translation_distance: f32,
}

/// Compares the first and last two-pointer frames.
///
/// `None` unless there are at least two frames and every frame has exactly
/// two pointers. A zero initial spread reports a scale of 1.
pub fn multi_touch_metrics(frames: &[MultiTouchFrame]) -> Option<MultiTouchMetrics> {
    if frames.len() < 2 || frames.iter().any(|frame| frame.pointers.len() != 2) {
        return None;
    }
    let (first_a, first_b) = frames.first()?.pointer_pair()?;
    let (last_a, last_b) = frames.last()?.pointer_pair()?;

    let initial_distance = distance(first_a, first_b);
    let final_distance = distance(last_a, last_b);
    let scale = if initial_distance > 0.0 {
        final_distance / initial_distance
    } else {
        1.0
    };

    let rotation = angle(last_a, last_b) - angle(first_a, first_b);

    let initial_center = midpoint(first_a, first_b);
    let final_center = midpoint(last_a, last_b);

    Some(MultiTouchMetrics {
        scale,
        rotation,
        translation: final_center - initial_center,
        translation_distance: distance(initial_center, final_center),
    })
}

/// Classifies a two-finger sequence as pinch, rotate or pan.
///
/// Pinch is checked before rotate, and both before pan. Insufficient input is
/// not an error, it classifies as [`MultiTouchGesture::None`].
pub fn detect_multi_touch(
    frames: &[MultiTouchFrame],
    config: &MultiTouchConfig,
) -> MultiTouchGesture {
    let Some(metrics) = multi_touch_metrics(frames) else {
        return MultiTouchGesture::None;
    };
    let gesture = classify(&metrics, config);
    log::trace!("multi-touch over {} frames: {gesture}", frames.len());
    gesture
}

fn classify(metrics: &MultiTouchMetrics, config: &MultiTouchConfig) -> MultiTouchGesture {
    let scale_change = (metrics.scale - 1.0).abs();
    let rotation_change = metrics.rotation.abs();
    let weighted_translation = metrics.translation_distance / config.translation_scale;

    if scale_change > config.threshold
        && scale_change > rotation_change
        && scale_change > weighted_translation
    {
        MultiTouchGesture::Pinch {
            scale: metrics.scale,
        }
    } else if rotation_change > config.threshold && rotation_change > scale_change {
        MultiTouchGesture::Rotate {
            rotation: metrics.rotation,
        }
    } else if metrics.translation_distance > config.min_pan_distance {
        MultiTouchGesture::Pan {
            translation: metrics.translation,
        }
    } else {
        MultiTouchGesture::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::TimestampedSample;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn frame(a: (f32, f32), b: (f32, f32), t: i64) -> MultiTouchFrame {
        MultiTouchFrame::pair(
            TimestampedSample::new(a.0, a.1, t),
            TimestampedSample::new(b.0, b.1, t),
            t,
        )
    }

    fn detect(frames: &[MultiTouchFrame]) -> MultiTouchGesture {
        detect_multi_touch(frames, &MultiTouchConfig::default())
    }

    #[test]
    fn spreading_fingers_is_a_pinch() {
        let frames = [
            frame((0.0, 0.0), (100.0, 0.0), 0),
            frame((-50.0, 0.0), (150.0, 0.0), 100),
        ];
        assert_eq!(detect(&frames), MultiTouchGesture::Pinch { scale: 2.0 });
    }

    #[test]
    fn quarter_turn_is_a_rotation() {
        let frames = [
            frame((-50.0, 0.0), (50.0, 0.0), 0),
            frame((0.0, -50.0), (0.0, 50.0), 100),
        ];
        match detect(&frames) {
            MultiTouchGesture::Rotate { rotation } => {
                assert!((rotation - FRAC_PI_2).abs() < 1e-5, "{rotation}")
            }
            other => panic!("expected rotate, got {other:?}"),
        }
    }

    #[test]
    fn moving_both_fingers_together_is_a_pan() {
        let frames = [
            frame((0.0, 0.0), (100.0, 0.0), 0),
            frame((30.0, 40.0), (130.0, 40.0), 100),
        ];
        assert_eq!(
            detect(&frames),
            MultiTouchGesture::Pan {
                translation: Point::new(30.0, 40.0)
            }
        );
    }

    #[test]
    fn small_jitter_is_nothing() {
        let frames = [
            frame((0.0, 0.0), (100.0, 0.0), 0),
            frame((2.0, 1.0), (101.0, 1.0), 100),
        ];
        assert!(detect(&frames).is_none());
    }

    #[test]
    fn wrong_pointer_count_or_single_frame_is_nothing() {
        let single_pointer = [
            MultiTouchFrame::new([TimestampedSample::new(0.0, 0.0, 0)], 0),
            MultiTouchFrame::new([TimestampedSample::new(100.0, 0.0, 50)], 50),
        ];
        assert!(detect(&single_pointer).is_none());
        assert!(multi_touch_metrics(&single_pointer).is_none());

        let one_frame = [frame((0.0, 0.0), (100.0, 0.0), 0)];
        assert!(detect(&one_frame).is_none());

        let mut mixed = vec![
            frame((0.0, 0.0), (100.0, 0.0), 0),
            frame((0.0, 0.0), (100.0, 0.0), 10),
            frame((-50.0, 0.0), (150.0, 0.0), 20),
        ];
        mixed[1]
            .pointers
            .push(TimestampedSample::new(500.0, 500.0, 10));
        assert!(detect(&mixed).is_none());
    }

    #[test]
    fn coincident_start_pointers_do_not_divide_by_zero() {
        let frames = [
            frame((10.0, 10.0), (10.0, 10.0), 0),
            frame((0.0, 10.0), (20.0, 10.0), 100),
        ];
        let metrics = multi_touch_metrics(&frames).expect("two-pointer frames");
        assert_eq!(metrics.scale, 1.0);
        assert!(metrics.scale.is_finite());
    }

    #[test]
    fn rotation_is_not_wrapped_across_branch_cut() {
        // Angle goes from just under +π to just over -π.
        let frames = [
            frame((0.0, 0.0), (-100.0, 1.0), 0),
            frame((0.0, 0.0), (-100.0, -1.0), 100),
        ];
        let metrics = multi_touch_metrics(&frames).expect("two-pointer frames");
        assert!(metrics.rotation < -PI, "{}", metrics.rotation);
    }

    #[test]
    fn pinch_dominates_weighted_translation() {
        // Scale change 0.5 against a 40px centroid move (weighted 0.4).
        let frames = [
            frame((0.0, 0.0), (100.0, 0.0), 0),
            frame((15.0, 0.0), (165.0, 0.0), 100),
        ];
        assert_eq!(detect(&frames), MultiTouchGesture::Pinch { scale: 1.5 });
    }

    #[test]
    fn doubling_spread_with_slight_twist_is_a_pinch() {
        // Scale change 1.0 against a 0.3rad turn about a fixed center.
        let (sin, cos) = 0.3f32.sin_cos();
        let frames = [
            frame((-50.0, 0.0), (50.0, 0.0), 0),
            frame((-100.0 * cos, -100.0 * sin), (100.0 * cos, 100.0 * sin), 100),
        ];
        match detect(&frames) {
            MultiTouchGesture::Pinch { scale } => assert!((scale - 2.0).abs() < 1e-4, "{scale}"),
            other => panic!("expected pinch, got {other:?}"),
        }
    }

    #[test]
    fn quarter_turn_outweighs_doubling_spread() {
        // Scale change 1.0 against a rotation of π/2.
        let frames = [
            frame((-50.0, 0.0), (50.0, 0.0), 0),
            frame((0.0, -100.0), (0.0, 100.0), 100),
        ];
        let metrics = multi_touch_metrics(&frames).expect("two-pointer frames");
        assert!((metrics.scale - 2.0).abs() < 1e-5);
        match detect(&frames) {
            MultiTouchGesture::Rotate { rotation } => {
                assert!((rotation - FRAC_PI_2).abs() < 1e-5, "{rotation}")
            }
            other => panic!("expected rotate, got {other:?}"),
        }
    }

    #[test]
    fn custom_thresholds_change_the_outcome() {
        let frames = [
            frame((0.0, 0.0), (100.0, 0.0), 0),
            frame((20.0, 0.0), (120.0, 0.0), 100),
        ];
        assert_eq!(
            detect(&frames),
            MultiTouchGesture::Pan {
                translation: Point::new(20.0, 0.0)
            }
        );
        let strict = MultiTouchConfig::default().with_min_pan_distance(25.0);
        assert!(detect_multi_touch(&frames, &strict).is_none());

        // Scale 1.5 with a 20px centroid move: weighted 0.2 by default.
        let frames = [
            frame((0.0, 0.0), (100.0, 0.0), 0),
            frame((-5.0, 0.0), (145.0, 0.0), 100),
        ];
        assert_eq!(detect(&frames), MultiTouchGesture::Pinch { scale: 1.5 });
        let weighted = MultiTouchConfig::default().with_translation_scale(10.0);
        assert!(matches!(
            detect_multi_touch(&frames, &weighted),
            MultiTouchGesture::Pan { .. }
        ));
    }
}
