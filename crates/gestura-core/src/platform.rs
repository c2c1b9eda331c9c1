//! Platform abstraction traits for Gestura services.
//!
//! These traits let the gesture code delegate wall-clock reads and deferred
//! callbacks to the host event loop, so analysis stays deterministic under
//! test and integrates with any cooperative scheduler in production.

use std::fmt;

/// Milliseconds on the same timeline as pointer sample timestamps.
pub type TimestampMs = i64;

/// Provides the current time for the gesture runtime.
pub trait Clock {
    /// Returns the current time in milliseconds.
    fn now_millis(&self) -> TimestampMs;

    /// Returns the number of milliseconds elapsed since `since`, saturating at zero.
    fn elapsed_millis(&self, since: TimestampMs) -> u64 {
        self.now_millis().saturating_sub(since).max(0) as u64
    }
}

/// Identifier handed out by a [`TimerScheduler`] for a pending callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Runs callbacks after a delay on a single-threaded event loop.
///
/// Implementations must not hold internal borrows while invoking callbacks:
/// a callback is allowed to schedule or cancel other timers.
pub trait TimerScheduler {
    /// Schedule `callback` to run once, `delay_ms` from now.
    fn schedule(&self, delay_ms: u64, callback: Box<dyn FnOnce() + 'static>) -> TimerId;

    /// Cancel a pending callback. Unknown or already-fired ids are ignored.
    fn cancel(&self, id: TimerId);
}

impl<T: Clock + ?Sized> Clock for std::rc::Rc<T> {
    fn now_millis(&self) -> TimestampMs {
        (**self).now_millis()
    }
}

impl<T: TimerScheduler + ?Sized> TimerScheduler for std::rc::Rc<T> {
    fn schedule(&self, delay_ms: u64, callback: Box<dyn FnOnce() + 'static>) -> TimerId {
        (**self).schedule(delay_ms, callback)
    }

    fn cancel(&self, id: TimerId) {
        (**self).cancel(id)
    }
}
