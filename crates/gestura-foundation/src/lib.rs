//! Gesture analysis for Gestura
//!
//! Turns ordered pointer samples into gesture descriptions:
//! - [`velocity_at`] and friends estimate release velocity over a trailing window,
//! - [`analyze_pan_gesture`] validates and describes a single-pointer pan,
//! - [`detect_multi_touch`] tells pinch, rotate and two-finger pan apart,
//! - [`PanTracker`] / [`MultiTouchTracker`] buffer samples for an input handler.
//!
//! Everything except the trackers is a pure function of its arguments.

mod config;
pub mod gesture_constants;
mod multi_touch;
mod pan;
mod sample;
mod tracker;
mod velocity;

pub use config::{ConfigError, GestureConfig, MultiTouchConfig, VelocityAnchor};
pub use multi_touch::{detect_multi_touch, multi_touch_metrics, MultiTouchGesture, MultiTouchMetrics};
pub use pan::{analyze_pan_gesture, GestureAnalysis, PanGesture, RejectReason};
pub use sample::{MultiTouchFrame, PointerVec, TimestampedSample};
pub use tracker::{MultiTouchTracker, PanTracker};
pub use velocity::{average_velocity, estimate_velocity, step_velocities, velocity_at, velocity_trailing};

pub mod prelude {
    pub use crate::config::{GestureConfig, MultiTouchConfig, VelocityAnchor};
    pub use crate::multi_touch::{detect_multi_touch, MultiTouchGesture};
    pub use crate::pan::{analyze_pan_gesture, GestureAnalysis, PanGesture};
    pub use crate::sample::{MultiTouchFrame, TimestampedSample};
    pub use crate::tracker::{MultiTouchTracker, PanTracker};
    pub use gestura_geometry::prelude::*;
}
