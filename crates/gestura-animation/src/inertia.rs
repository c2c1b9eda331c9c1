//! Friction-based inertia decay.
//!
//! Each step scales the velocity by a constant friction factor and moves the
//! offset by the new velocity, the same per-frame update a drag handler runs
//! after release. The sequence is lazy and deterministic: the same inputs
//! always produce the same steps.

use gestura_geometry::Point;

// ============================================================================
// Defaults
// ============================================================================

/// Fraction of velocity kept from one step to the next.
pub const DEFAULT_FRICTION: f32 = 0.95;

/// Hard cap on the number of emitted steps.
pub const DEFAULT_MAX_STEPS: usize = 50;

/// Velocity magnitude (px/step) below which the motion is considered at rest.
pub const REST_VELOCITY_THRESHOLD: f32 = 0.1;

/// One step of an inertia trajectory, as an offset from the release point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaStep {
    pub x: f32,
    pub y: f32,
    pub step: usize,
}

impl InertiaStep {
    pub fn offset(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ============================================================================
// Decay iterator
// ============================================================================

/// Lazy iterator over [`InertiaStep`]s.
///
/// Finishes after the first step whose velocity drops below the rest
/// threshold, or after `max_steps` steps.
#[derive(Debug, Clone)]
pub struct InertiaDecay {
    velocity: Point,
    position: Point,
    friction: f32,
    rest_threshold: f32,
    max_steps: usize,
    step: usize,
    finished: bool,
}

impl InertiaDecay {
    fn new(spec: &InertiaSpec, initial_velocity: Point) -> Self {
        Self {
            velocity: initial_velocity,
            position: Point::ZERO,
            friction: spec.friction,
            rest_threshold: spec.rest_threshold,
            max_steps: spec.max_steps,
            step: 0,
            finished: false,
        }
    }

    /// Velocity after the most recently emitted step.
    pub fn velocity(&self) -> Point {
        self.velocity
    }
}

impl Iterator for InertiaDecay {
    type Item = InertiaStep;

    fn next(&mut self) -> Option<InertiaStep> {
        if self.finished || self.step >= self.max_steps {
            return None;
        }

        self.velocity *= self.friction;
        self.position += self.velocity;
        let emitted = InertiaStep {
            x: self.position.x,
            y: self.position.y,
            step: self.step,
        };

        self.step += 1;
        if self.velocity.magnitude() < self.rest_threshold {
            self.finished = true;
        }
        Some(emitted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.max_steps.saturating_sub(self.step)))
        }
    }
}

impl std::iter::FusedIterator for InertiaDecay {}

// ============================================================================
// Parameters
// ============================================================================

/// Parameters for an inertia simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaSpec {
    pub friction: f32,
    pub max_steps: usize,
    pub rest_threshold: f32,
}

impl Default for InertiaSpec {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            max_steps: DEFAULT_MAX_STEPS,
            rest_threshold: REST_VELOCITY_THRESHOLD,
        }
    }
}

impl InertiaSpec {
    pub fn new(friction: f32, max_steps: usize) -> Self {
        Self {
            friction,
            max_steps,
            ..Self::default()
        }
    }

    pub fn decay(&self, initial_velocity: Point) -> InertiaDecay {
        InertiaDecay::new(self, initial_velocity)
    }

    /// Offset at which the simulated motion comes to rest.
    pub fn rest_offset(&self, initial_velocity: Point) -> Point {
        self.decay(initial_velocity)
            .last()
            .map(|step| step.offset())
            .unwrap_or(Point::ZERO)
    }
}

/// Inertia trajectory for `initial_velocity` under `friction`, at most
/// `max_steps` long.
pub fn inertia_decay(initial_velocity: Point, friction: f32, max_steps: usize) -> InertiaDecay {
    InertiaSpec::new(friction, max_steps).decay(initial_velocity)
}
