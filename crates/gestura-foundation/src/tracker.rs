//! Bounded sample buffers for the input layer.
//!
//! A tracker is what a pointer handler talks to: it records samples as they
//! arrive, keeps memory bounded, and reads the clock when the gesture ends.
//! The press sample (or first frame) is kept even after the trailing buffer
//! has rolled over, so distance and duration still span the whole gesture.

use std::collections::VecDeque;

use gestura_core::Clock;
use gestura_geometry::Point;

use crate::config::{ConfigError, GestureConfig, MultiTouchConfig};
use crate::gesture_constants::MAX_EVENT_HISTORY;
use crate::multi_touch::{detect_multi_touch, MultiTouchGesture};
use crate::pan::{analyze_pan_gesture, GestureAnalysis};
use crate::sample::{MultiTouchFrame, TimestampedSample};

/// Rolling buffer that remembers the first entry it ever evicted.
#[derive(Debug, Clone)]
struct AnchoredHistory<T> {
    origin: Option<T>,
    recent: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> AnchoredHistory<T> {
    fn new(capacity: usize) -> Self {
        Self {
            origin: None,
            recent: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, value: T) {
        if self.recent.len() == self.capacity {
            if let Some(evicted) = self.recent.pop_front() {
                if self.origin.is_none() {
                    self.origin = Some(evicted);
                }
            }
        }
        self.recent.push_back(value);
    }

    fn len(&self) -> usize {
        self.recent.len() + usize::from(self.origin.is_some())
    }

    fn to_vec(&self) -> Vec<T> {
        self.origin
            .iter()
            .cloned()
            .chain(self.recent.iter().cloned())
            .collect()
    }

    fn clear(&mut self) {
        self.origin = None;
        self.recent.clear();
    }
}

/// Collects one pointer's samples and analyzes them as a pan on release.
#[derive(Debug)]
pub struct PanTracker<C: Clock> {
    clock: C,
    config: GestureConfig,
    history: AnchoredHistory<TimestampedSample>,
}

impl<C: Clock> PanTracker<C> {
    /// Fails if `config` does not pass [`GestureConfig::validate`]. The
    /// trailing buffer holds `config.max_event_history` samples.
    pub fn new(clock: C, config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate().inspect_err(|err| {
            log::debug!("pan tracker rejected config: {err}");
        })?;
        Ok(Self {
            clock,
            history: AnchoredHistory::new(config.max_event_history),
            config,
        })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn record(&mut self, sample: TimestampedSample) {
        self.history.push(sample);
    }

    /// Records `position` stamped with the tracker's clock.
    pub fn record_position(&mut self, position: Point) {
        let now = self.clock.now_millis();
        self.record(TimestampedSample::at(position, now));
    }

    /// Number of samples the analysis would see.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn samples(&self) -> Vec<TimestampedSample> {
        self.history.to_vec()
    }

    /// Analyzes what has been recorded so far, using the clock for "now".
    pub fn analyze(&self) -> GestureAnalysis {
        let samples = self.history.to_vec();
        analyze_pan_gesture(&samples, &self.config, self.clock.now_millis())
    }

    /// Analyzes and clears, ready for the next press.
    pub fn finish(&mut self) -> GestureAnalysis {
        let analysis = self.analyze();
        self.reset();
        analysis
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

/// Collects two-pointer frames for [`detect_multi_touch`].
#[derive(Debug, Clone)]
pub struct MultiTouchTracker {
    config: MultiTouchConfig,
    history: AnchoredHistory<MultiTouchFrame>,
}

impl MultiTouchTracker {
    pub fn new(config: MultiTouchConfig) -> Result<Self, ConfigError> {
        Self::with_capacity(config, MAX_EVENT_HISTORY)
    }

    pub fn with_capacity(config: MultiTouchConfig, capacity: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        if capacity < 1 {
            return Err(ConfigError::HistoryTooShort { history: capacity });
        }
        Ok(Self {
            config,
            history: AnchoredHistory::new(capacity),
        })
    }

    pub fn record(&mut self, frame: MultiTouchFrame) {
        self.history.push(frame);
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn classify(&self) -> MultiTouchGesture {
        detect_multi_touch(&self.history.to_vec(), &self.config)
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
