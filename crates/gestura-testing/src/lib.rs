//! Testing utilities for Gestura
//!
//! Virtual time (`ManualClock`, `ManualScheduler`) so timer-driven code can be
//! stepped deterministically, plus builders for pointer sample sequences.

pub mod builders;
pub mod manual_time;

pub use builders::*;
pub use manual_time::*;

pub mod prelude {
    pub use crate::builders::{linear_drag, sample, two_finger_frame};
    pub use crate::manual_time::{ManualClock, ManualScheduler};
}
