//! Virtual time for tests.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use gestura_core::{Clock, TimerId, TimerScheduler, TimestampMs};
use rustc_hash::FxHashMap;

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<TimestampMs>,
}

impl ManualClock {
    pub fn new(start_ms: TimestampMs) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: TimestampMs) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get() + delta_ms as i64);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> TimestampMs {
        self.now.get()
    }
}

struct PendingTimer {
    deadline: TimestampMs,
    callback: Box<dyn FnOnce() + 'static>,
}

/// Timer scheduler over a [`ManualClock`]; timers only fire inside
/// [`ManualScheduler::advance_by`] or [`ManualScheduler::run_due`].
pub struct ManualScheduler {
    clock: Rc<ManualClock>,
    next_id: Cell<u64>,
    timers: RefCell<FxHashMap<TimerId, PendingTimer>>,
}

impl ManualScheduler {
    pub fn new(start_ms: TimestampMs) -> Self {
        Self::with_clock(Rc::new(ManualClock::new(start_ms)))
    }

    pub fn with_clock(clock: Rc<ManualClock>) -> Self {
        Self {
            clock,
            next_id: Cell::new(1),
            timers: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn clock(&self) -> Rc<ManualClock> {
        Rc::clone(&self.clock)
    }

    pub fn now_millis(&self) -> TimestampMs {
        self.clock.now_millis()
    }

    pub fn pending_count(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn next_deadline(&self) -> Option<TimestampMs> {
        self.timers.borrow().values().map(|timer| timer.deadline).min()
    }

    /// Moves time forward by `delta_ms`, firing every timer that comes due
    /// on the way in deadline order. Returns how many fired.
    pub fn advance_by(&self, delta_ms: u64) -> usize {
        let target = self.clock.now_millis() + delta_ms as i64;
        let fired = self.fire_until(target);
        self.clock.set(target);
        fired
    }

    /// Fires timers already due at the current time.
    pub fn run_due(&self) -> usize {
        self.fire_until(self.clock.now_millis())
    }

    fn fire_until(&self, target: TimestampMs) -> usize {
        let mut fired = 0;
        loop {
            let next = self
                .timers
                .borrow()
                .iter()
                .filter(|(_, timer)| timer.deadline <= target)
                .min_by_key(|(id, timer)| (timer.deadline, **id))
                .map(|(id, timer)| (*id, timer.deadline));
            let Some((id, deadline)) = next else {
                break;
            };

            // Release the borrow before running: callbacks may reschedule.
            let timer = self.timers.borrow_mut().remove(&id);
            if deadline > self.clock.now_millis() {
                self.clock.set(deadline);
            }
            if let Some(timer) = timer {
                log::trace!("manual scheduler: firing {id} at {deadline}ms");
                (timer.callback)();
                fired += 1;
            }
        }
        fired
    }
}

impl Clock for ManualScheduler {
    fn now_millis(&self) -> TimestampMs {
        self.clock.now_millis()
    }
}

impl TimerScheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u64, callback: Box<dyn FnOnce() + 'static>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let deadline = self.clock.now_millis() + delay_ms as i64;
        self.timers
            .borrow_mut()
            .insert(id, PendingTimer { deadline, callback });
        id
    }

    fn cancel(&self, id: TimerId) {
        self.timers.borrow_mut().remove(&id);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.clock.now_millis())
            .field("pending", &self.timers.borrow().len())
            .finish()
    }
}
