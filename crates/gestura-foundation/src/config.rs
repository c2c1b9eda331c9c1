//! Tunable configuration for pan and multi-touch analysis.

use std::fmt;

use crate::gesture_constants::*;

/// Which instant the velocity window trails from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VelocityAnchor {
    /// Window ends at the caller-supplied "now". Samples that went stale
    /// between release and analysis drop out of the estimate.
    #[default]
    CallTime,
    /// Window ends at the newest sample's timestamp; the result depends only
    /// on the samples.
    LatestSample,
}

/// Thresholds for [`analyze_pan_gesture`](crate::analyze_pan_gesture).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub inertia_threshold: f32,
    pub max_event_history: usize,
    pub velocity_window_ms: i64,
    pub min_distance: f32,
    pub min_duration_ms: i64,
    pub velocity_anchor: VelocityAnchor,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            inertia_threshold: INERTIA_THRESHOLD,
            max_event_history: MAX_EVENT_HISTORY,
            velocity_window_ms: VELOCITY_WINDOW_MS,
            min_distance: MIN_PAN_DISTANCE,
            min_duration_ms: MIN_PAN_DURATION_MS,
            velocity_anchor: VelocityAnchor::CallTime,
        }
    }
}

impl GestureConfig {
    pub fn with_inertia_threshold(mut self, threshold: f32) -> Self {
        self.inertia_threshold = threshold;
        self
    }

    pub fn with_max_event_history(mut self, history: usize) -> Self {
        self.max_event_history = history;
        self
    }

    pub fn with_velocity_window(mut self, window_ms: i64) -> Self {
        self.velocity_window_ms = window_ms;
        self
    }

    pub fn with_min_distance(mut self, distance: f32) -> Self {
        self.min_distance = distance;
        self
    }

    pub fn with_min_duration(mut self, duration_ms: i64) -> Self {
        self.min_duration_ms = duration_ms;
        self
    }

    pub fn with_velocity_anchor(mut self, anchor: VelocityAnchor) -> Self {
        self.velocity_anchor = anchor;
        self
    }

    /// Checks the values a tracker relies on. The analyzer itself accepts any
    /// config; this is for callers that want to reject bad settings up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("inertia_threshold", self.inertia_threshold)?;
        check_non_negative("min_distance", self.min_distance)?;
        if self.max_event_history < 2 {
            return Err(ConfigError::HistoryTooShort {
                history: self.max_event_history,
            });
        }
        if self.velocity_window_ms <= 0 {
            return Err(ConfigError::NonPositiveWindow {
                window_ms: self.velocity_window_ms,
            });
        }
        if self.min_duration_ms < 0 {
            return Err(ConfigError::NegativeDuration {
                field: "min_duration_ms",
                value: self.min_duration_ms,
            });
        }
        Ok(())
    }
}

/// Thresholds for [`detect_multi_touch`](crate::detect_multi_touch).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MultiTouchConfig {
    pub threshold: f32,
    pub translation_scale: f32,
    pub min_pan_distance: f32,
}

impl Default for MultiTouchConfig {
    fn default() -> Self {
        Self {
            threshold: MULTI_TOUCH_THRESHOLD,
            translation_scale: MULTI_TOUCH_TRANSLATION_SCALE,
            min_pan_distance: MULTI_TOUCH_MIN_PAN_DISTANCE,
        }
    }
}

impl MultiTouchConfig {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_min_pan_distance(mut self, distance: f32) -> Self {
        self.min_pan_distance = distance;
        self
    }

    /// Pixels of centroid travel that weigh the same as a scale change of 1.
    pub fn with_translation_scale(mut self, scale: f32) -> Self {
        self.translation_scale = scale;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("threshold", self.threshold)?;
        check_non_negative("min_pan_distance", self.min_pan_distance)?;
        if !(self.translation_scale.is_finite() && self.translation_scale > 0.0) {
            return Err(ConfigError::InvalidThreshold {
                field: "translation_scale",
                value: self.translation_scale,
            });
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { field, value })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidThreshold { field: &'static str, value: f32 },
    NegativeDuration { field: &'static str, value: i64 },
    NonPositiveWindow { window_ms: i64 },
    HistoryTooShort { history: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold { field, value } => {
                write!(f, "{field} must be a finite non-negative number, got {value}")
            }
            ConfigError::NegativeDuration { field, value } => {
                write!(f, "{field} must not be negative, got {value}ms")
            }
            ConfigError::NonPositiveWindow { window_ms } => {
                write!(f, "velocity window must be positive, got {window_ms}ms")
            }
            ConfigError::HistoryTooShort { history } => {
                write!(f, "event history must hold at least 2 samples, got {history}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
