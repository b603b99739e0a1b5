//! Simulated time: a settable clock and a waiter that advances it.
//!
//! Both types are cheap handles over shared state, so a test can keep one
//! clone to inspect or move time while the scheduler holds another.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::clock::Clock;
use crate::error::BoxError;
use crate::time::Timestamp;
use crate::waiter::Waiter;

#[derive(Clone, Default)]
pub struct SimClock<T> {
    now: Rc<Cell<T>>,
}

impl<T: Timestamp> fmt::Debug for SimClock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimClock").field("now", &self.now.get()).finish()
    }
}

impl<T: Timestamp> SimClock<T> {
    pub fn new(start: T) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, time: T) {
        self.now.set(time);
    }

    pub fn advance(&self, delta: T::Delta) {
        self.now.set(self.now.get().shifted(delta));
    }
}

impl<T: Timestamp> Clock for SimClock<T> {
    type Time = T;

    fn now(&self) -> T {
        self.now.get()
    }
}

/// Waiter that jumps its [`SimClock`] forward instead of sleeping.
///
/// Every requested delta is recorded, zero-length yields included.
#[derive(Debug, Clone)]
pub struct SimWaiter<T: Timestamp> {
    clock: SimClock<T>,
    waits: Rc<RefCell<Vec<T::Delta>>>,
}

impl<T: Timestamp> SimWaiter<T> {
    pub fn new(clock: SimClock<T>) -> Self {
        Self {
            clock,
            waits: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn clock(&self) -> &SimClock<T> {
        &self.clock
    }

    /// Deltas requested so far, in call order.
    pub fn waits(&self) -> Vec<T::Delta> {
        self.waits.borrow().clone()
    }
}

impl<T: Timestamp> Waiter<T::Delta> for SimWaiter<T> {
    fn wait(&self, delta: T::Delta) -> Result<(), BoxError> {
        self.waits.borrow_mut().push(delta);
        if delta > T::zero_delta() {
            self.clock.advance(delta);
        }
        Ok(())
    }
}

/// A simulated clock starting at `start` paired with a waiter driving it.
pub fn simulated<T: Timestamp>(start: T) -> (SimClock<T>, SimWaiter<T>) {
    let clock = SimClock::new(start);
    let waiter = SimWaiter::new(clock.clone());
    (clock, waiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FloatTime;

    #[test]
    fn waiter_advances_the_shared_clock() {
        let (clock, waiter) = simulated(10_i64);
        waiter.wait(5).unwrap();
        waiter.wait(0).unwrap();
        assert_eq!(clock.now(), 15);
        assert_eq!(waiter.waits(), vec![5, 0]);
    }

    #[test]
    fn clock_can_be_moved_by_hand() {
        let (clock, waiter) = simulated(FloatTime(0.0));
        clock.advance(1.5);
        assert_eq!(waiter.clock().now(), FloatTime(1.5));
        clock.set(FloatTime(-3.0));
        assert_eq!(clock.now(), FloatTime(-3.0));
    }
}
