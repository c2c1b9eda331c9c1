//! Pointer samples as recorded by the input layer.

use gestura_core::TimestampMs;
use gestura_geometry::Point;
use smallvec::SmallVec;

/// One pointer position at one instant. Sequences are ordered oldest first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimestampedSample {
    pub x: f32,
    pub y: f32,
    pub timestamp: TimestampMs,
}

impl TimestampedSample {
    pub const fn new(x: f32, y: f32, timestamp: TimestampMs) -> Self {
        Self { x, y, timestamp }
    }

    pub const fn at(position: Point, timestamp: TimestampMs) -> Self {
        Self::new(position.x, position.y, timestamp)
    }

    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Pointer storage sized for the common two-finger case.
pub type PointerVec = SmallVec<[TimestampedSample; 2]>;

/// Snapshot of every active pointer at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiTouchFrame {
    pub pointers: PointerVec,
    pub timestamp: TimestampMs,
}

impl MultiTouchFrame {
    pub fn new(
        pointers: impl IntoIterator<Item = TimestampedSample>,
        timestamp: TimestampMs,
    ) -> Self {
        Self {
            pointers: pointers.into_iter().collect(),
            timestamp,
        }
    }

    pub fn pair(a: TimestampedSample, b: TimestampedSample, timestamp: TimestampMs) -> Self {
        let mut pointers = PointerVec::new();
        pointers.push(a);
        pointers.push(b);
        Self {
            pointers,
            timestamp,
        }
    }

    /// Positions of the two pointers, or `None` unless exactly two are down.
    pub fn pointer_pair(&self) -> Option<(Point, Point)> {
        match self.pointers.as_slice() {
            [a, b] => Some((a.position(), b.position())),
            _ => None,
        }
    }
}
