//! Core runtime services for Gestura.
//!
//! Gesture analysis itself is pure; this crate holds the pieces that touch
//! time: the [`Clock`] and [`TimerScheduler`] seams a host event loop
//! implements, and the [`debounce`] / [`throttle`] wrappers built on them.

mod platform;
mod rate_limit;

pub use platform::{Clock, TimerId, TimerScheduler, TimestampMs};
pub use rate_limit::{debounce, throttle, Debounced, Throttled};
