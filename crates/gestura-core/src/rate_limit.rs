//! Debounce and throttle wrappers driven by the platform traits.
//!
//! Both wrappers are single-threaded handles: cloning shares the underlying
//! state, and the state is torn down (pending debounce disarmed) when the last
//! handle is dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::platform::{Clock, TimerId, TimerScheduler, TimestampMs};

struct DebounceState<A> {
    scheduler: Rc<dyn TimerScheduler>,
    delay_ms: u64,
    callback: RefCell<Box<dyn FnMut(A)>>,
    pending: Cell<Option<TimerId>>,
}

impl<A> Drop for DebounceState<A> {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }
}

/// Handle returned by [`debounce`].
pub struct Debounced<A: 'static> {
    inner: Rc<DebounceState<A>>,
}

impl<A: 'static> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static> Debounced<A> {
    /// Records a call. The wrapped function runs with the most recent argument
    /// once `delay_ms` passes without another call.
    pub fn call(&self, arg: A) {
        if let Some(previous) = self.inner.pending.take() {
            log::trace!("debounce: superseding {previous}");
            self.inner.scheduler.cancel(previous);
        }

        let weak = Rc::downgrade(&self.inner);
        let id = self.inner.scheduler.schedule(
            self.inner.delay_ms,
            Box::new(move || {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                state.pending.set(None);
                match state.callback.try_borrow_mut() {
                    Ok(mut callback) => (&mut *callback)(arg),
                    Err(_) => log::warn!("debounce: callback re-entered while running, call dropped"),
                };
            }),
        );
        self.inner.pending.set(Some(id));
    }

    /// Drops the pending invocation, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.pending.take() {
            self.inner.scheduler.cancel(id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    pub fn delay_ms(&self) -> u64 {
        self.inner.delay_ms
    }
}

impl<A: 'static> fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay_ms", &self.inner.delay_ms)
            .field("pending", &self.inner.pending.get())
            .finish()
    }
}

/// Wraps `f` so it only runs after `delay_ms` of silence since the last call.
///
/// Each call cancels the previously scheduled invocation.
pub fn debounce<A, F>(scheduler: Rc<dyn TimerScheduler>, delay_ms: u64, f: F) -> Debounced<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    Debounced {
        inner: Rc::new(DebounceState {
            scheduler,
            delay_ms,
            callback: RefCell::new(Box::new(f)),
            pending: Cell::new(None),
        }),
    }
}

struct ThrottleState<A> {
    clock: Rc<dyn Clock>,
    delay_ms: u64,
    callback: RefCell<Box<dyn FnMut(A)>>,
    last_run: Cell<Option<TimestampMs>>,
}

/// Handle returned by [`throttle`].
pub struct Throttled<A: 'static> {
    inner: Rc<ThrottleState<A>>,
}

impl<A: 'static> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static> Throttled<A> {
    /// Runs the wrapped function immediately unless it already ran within the
    /// last `delay_ms`. Returns whether it ran.
    ///
    /// Suppressed calls are dropped; nothing fires on the trailing edge.
    pub fn call(&self, arg: A) -> bool {
        let now = self.inner.clock.now_millis();
        let ready = match self.inner.last_run.get() {
            None => true,
            Some(last) => {
                let delay = i64::try_from(self.inner.delay_ms).unwrap_or(i64::MAX);
                now.saturating_sub(last) >= delay
            }
        };
        if !ready {
            log::trace!("throttle: suppressed call at {now}ms");
            return false;
        }

        let Ok(mut callback) = self.inner.callback.try_borrow_mut() else {
            log::warn!("throttle: callback re-entered while running, call dropped");
            return false;
        };
        self.inner.last_run.set(Some(now));
        (&mut *callback)(arg);
        true
    }

    /// Forgets the last execution so the next call runs immediately.
    pub fn reset(&self) {
        self.inner.last_run.set(None);
    }

    pub fn last_run(&self) -> Option<TimestampMs> {
        self.inner.last_run.get()
    }
}

impl<A: 'static> fmt::Debug for Throttled<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("delay_ms", &self.inner.delay_ms)
            .field("last_run", &self.inner.last_run.get())
            .finish()
    }
}

/// Wraps `f` in a leading-edge throttle of `delay_ms`.
pub fn throttle<A, F>(clock: Rc<dyn Clock>, delay_ms: u64, f: F) -> Throttled<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    Throttled {
        inner: Rc::new(ThrottleState {
            clock,
            delay_ms,
            callback: RefCell::new(Box::new(f)),
            last_run: Cell::new(None),
        }),
    }
}
