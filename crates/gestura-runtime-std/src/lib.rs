//! Standard runtime services backed by Rust's `std` library.
//!
//! This crate provides concrete implementations of the platform
//! abstraction traits defined in `gestura-core`: a wall clock on the Unix
//! epoch timeline, and a single-threaded timer loop that hosts can drive
//! from their own event loop or block on with [`StdTimerLoop::run_until_idle`].

use std::cell::{Cell, RefCell};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use gestura_core::{Clock, TimerId, TimerScheduler, TimestampMs};
use rustc_hash::FxHashMap;
use web_time::{SystemTime, UNIX_EPOCH};

/// Clock implementation backed by the system wall clock.
///
/// Reports milliseconds since the Unix epoch, the same timeline pointer
/// events are usually stamped on.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl Clock for StdClock {
    fn now_millis(&self) -> TimestampMs {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as TimestampMs)
            .unwrap_or(0)
    }
}

type TimerCallback = Box<dyn FnOnce() + 'static>;

/// Timer scheduler driven by the host.
///
/// Nothing fires on its own: call [`StdTimerLoop::run_due`] from the event
/// loop, or [`StdTimerLoop::run_until_idle`] to sleep through every pending
/// deadline.
pub struct StdTimerLoop<C: Clock = StdClock> {
    clock: C,
    next_id: Cell<u64>,
    queue: RefCell<BinaryHeap<Reverse<(TimestampMs, TimerId)>>>,
    callbacks: RefCell<FxHashMap<TimerId, TimerCallback>>,
}

impl StdTimerLoop<StdClock> {
    pub fn new() -> Self {
        Self::with_clock(StdClock)
    }

    /// Shared handle suitable for [`gestura_core::debounce`].
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }
}

impl Default for StdTimerLoop<StdClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> StdTimerLoop<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            next_id: Cell::new(1),
            queue: RefCell::new(BinaryHeap::new()),
            callbacks: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn pending_count(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }

    /// Earliest deadline among timers that have not been cancelled.
    pub fn next_deadline(&self) -> Option<TimestampMs> {
        let mut queue = self.queue.borrow_mut();
        let callbacks = self.callbacks.borrow();
        while let Some(Reverse((deadline, id))) = queue.peek().copied() {
            if callbacks.contains_key(&id) {
                return Some(deadline);
            }
            queue.pop();
        }
        None
    }

    /// Fires every timer whose deadline has passed. Returns how many fired.
    pub fn run_due(&self) -> usize {
        let now = self.clock.now_millis();
        let mut fired = 0;
        loop {
            let due = {
                let mut queue = self.queue.borrow_mut();
                match queue.peek() {
                    Some(Reverse((deadline, _))) if *deadline <= now => queue.pop(),
                    _ => None,
                }
            };
            let Some(Reverse((deadline, id))) = due else {
                break;
            };

            // Callbacks may schedule or cancel, so no borrow is held while they run.
            let callback = self.callbacks.borrow_mut().remove(&id);
            if let Some(callback) = callback {
                log::trace!("timer loop: firing {id} (due {deadline}ms, now {now}ms)");
                callback();
                fired += 1;
            }
        }
        fired
    }

    /// Sleeps until each pending deadline and fires it, returning once no
    /// timers remain. Returns the total number fired.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.next_deadline() {
            let wait = deadline.saturating_sub(self.clock.now_millis());
            if wait > 0 {
                std::thread::sleep(Duration::from_millis(wait as u64));
            }
            fired += self.run_due();
        }
        fired
    }
}

impl<C: Clock> Clock for StdTimerLoop<C> {
    fn now_millis(&self) -> TimestampMs {
        self.clock.now_millis()
    }
}

impl<C: Clock> TimerScheduler for StdTimerLoop<C> {
    fn schedule(&self, delay_ms: u64, callback: Box<dyn FnOnce() + 'static>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let deadline = self.clock.now_millis().saturating_add(delay_ms as TimestampMs);
        self.callbacks.borrow_mut().insert(id, callback);
        self.queue.borrow_mut().push(Reverse((deadline, id)));
        id
    }

    fn cancel(&self, id: TimerId) {
        if self.callbacks.borrow_mut().remove(&id).is_some() {
            log::trace!("timer loop: cancelled {id}");
        }
    }
}

impl<C: Clock> fmt::Debug for StdTimerLoop<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdTimerLoop")
            .field("now", &self.clock.now_millis())
            .field("pending", &self.pending_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
