//! Pure 2D math for Gestura
//!
//! This crate contains the point type and the small set of geometric
//! helpers (distance, angle, direction) that gesture analysis builds on.

mod direction;
mod point;

pub use direction::*;
pub use point::*;

pub mod prelude {
    pub use crate::direction::{direction, Direction};
    pub use crate::point::{angle, distance, midpoint, Point};
}
