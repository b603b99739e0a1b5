use std::rc::Rc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::TimeDelta;
use tracing::trace;

use crate::error::BoxError;
use crate::time_unit::TimeUnit;

/// Delay source for a scheduler.
///
/// `wait` is asked to suspend the caller for `delta`, a non-negative
/// distance on the scheduler's time line. Returning early is allowed: the run
/// loop re-reads the queue and the clock after every wait. The run loop also
/// calls `wait` with a zero delta after each executed action so the embedder
/// gets a chance to run other work.
pub trait Waiter<D> {
    fn wait(&self, delta: D) -> Result<(), BoxError>;
}

impl<D, W: Waiter<D> + ?Sized> Waiter<D> for &W {
    fn wait(&self, delta: D) -> Result<(), BoxError> {
        (**self).wait(delta)
    }
}

impl<D, W: Waiter<D> + ?Sized> Waiter<D> for Rc<W> {
    fn wait(&self, delta: D) -> Result<(), BoxError> {
        (**self).wait(delta)
    }
}

impl<D, W: Waiter<D> + ?Sized> Waiter<D> for Arc<W> {
    fn wait(&self, delta: D) -> Result<(), BoxError> {
        (**self).wait(delta)
    }
}

/// Blocks the current thread with [`thread::sleep`].
///
/// Numeric deltas are read in `unit`; chrono deltas carry their own unit.
/// A zero delta yields the thread instead of sleeping. With `max_wait` set, a
/// single call never sleeps longer than that.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepWaiter {
    unit: TimeUnit,
    max_wait: Option<Duration>,
}

impl SleepWaiter {
    pub fn new(unit: TimeUnit) -> Self {
        Self {
            unit,
            max_wait: None,
        }
    }

    pub fn with_max_wait(mut self, max_wait: Option<Duration>) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn max_wait(&self) -> Option<Duration> {
        self.max_wait
    }

    fn sleep(&self, requested: Duration) {
        let duration = match self.max_wait {
            Some(cap) => requested.min(cap),
            None => requested,
        };
        if duration.is_zero() {
            thread::yield_now();
        } else {
            trace!(?duration, "sleeping");
            thread::sleep(duration);
        }
    }
}

impl Waiter<TimeDelta> for SleepWaiter {
    fn wait(&self, delta: TimeDelta) -> Result<(), BoxError> {
        // Negative deltas fail the conversion and are treated as zero.
        self.sleep(delta.to_std().unwrap_or(Duration::ZERO));
        Ok(())
    }
}

impl Waiter<f64> for SleepWaiter {
    fn wait(&self, delta: f64) -> Result<(), BoxError> {
        let secs = delta * self.unit.as_secs_f64();
        let requested = match Duration::try_from_secs_f64(secs) {
            Ok(duration) => duration,
            // Too large to represent; negative and NaN deltas are due now.
            Err(_) if secs > 0.0 => Duration::MAX,
            Err(_) => Duration::ZERO,
        };
        self.sleep(requested);
        Ok(())
    }
}

impl Waiter<i64> for SleepWaiter {
    fn wait(&self, delta: i64) -> Result<(), BoxError> {
        let units = u64::try_from(delta).unwrap_or(0);
        self.sleep(self.unit.to_duration(units));
        Ok(())
    }
}
