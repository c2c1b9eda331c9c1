//! Default gesture thresholds.
//!
//! Distances are in logical pixels, velocities in pixels per millisecond and
//! times in milliseconds. [`GestureConfig`](crate::GestureConfig) and
//! [`MultiTouchConfig`](crate::MultiTouchConfig) start from these values.

/// Release velocity (px/ms) above which a pan should coast with inertia.
pub const INERTIA_THRESHOLD: f32 = 0.5;

/// How many trailing samples feed the average step velocity.
pub const MAX_EVENT_HISTORY: usize = 10;

/// Trailing span used for the release velocity estimate.
pub const VELOCITY_WINDOW_MS: i64 = 100;

/// Minimum straight-line travel for a pan to count.
pub const MIN_PAN_DISTANCE: f32 = 5.0;

/// Minimum press-to-release time for a pan to count.
pub const MIN_PAN_DURATION_MS: i64 = 50;

/// Relative change (scale ratio, radians) a two-finger gesture needs before it
/// is reported as a pinch or rotation.
pub const MULTI_TOUCH_THRESHOLD: f32 = 0.1;

/// Divisor that brings centroid travel (px) onto the same footing as the
/// scale change when deciding whether a pinch dominates.
pub const MULTI_TOUCH_TRANSLATION_SCALE: f32 = 100.0;

/// Centroid travel required for a two-finger pan.
pub const MULTI_TOUCH_MIN_PAN_DISTANCE: f32 = 10.0;
