use std::cell::{Cell, RefCell};
use std::fmt;

use tracing::{debug, trace, warn};

use crate::clock::{Clock, UtcClock};
use crate::error::{BoxError, Result, SchedError};
use crate::event::{Event, EventId, Priority};
use crate::store::EventStore;
use crate::time::Timestamp;
use crate::waiter::{SleepWaiter, Waiter};

/// Time type of a clock.
pub type TimeOf<C> = <C as Clock>::Time;

/// Delta type of a clock's time line.
pub type DeltaOf<C> = <<C as Clock>::Time as Timestamp>::Delta;

/// Boxed action as stored in the queue.
pub type Action<C, W> = Box<dyn FnOnce(&Scheduler<C, W>) -> std::result::Result<(), BoxError>>;

/// Event queue plus the loop that drains it.
///
/// Every operation takes `&self` so that actions, which receive the
/// scheduler when they run, can schedule or cancel further events. The type
/// is neither `Send` nor `Sync`: use one scheduler per thread, or guard all
/// access with a lock.
pub struct Scheduler<C: Clock = UtcClock, W = SleepWaiter> {
    clock: C,
    waiter: W,
    queue: RefCell<EventStore<TimeOf<C>, Action<C, W>>>,
    next_sequence: Cell<u64>,
}

impl Default for Scheduler<UtcClock, SleepWaiter> {
    fn default() -> Self {
        Self::new(UtcClock, SleepWaiter::default())
    }
}

impl<C, W> Scheduler<C, W>
where
    C: Clock,
    W: Waiter<DeltaOf<C>>,
{
    pub fn new(clock: C, waiter: W) -> Self {
        Self {
            clock,
            waiter,
            queue: RefCell::new(EventStore::new()),
            next_sequence: Cell::new(0),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn waiter(&self) -> &W {
        &self.waiter
    }

    /// Schedules `action` at absolute `time`.
    ///
    /// A time in the past is accepted and simply makes the event due at
    /// once. Returns the handle to pass to [`cancel`](Self::cancel).
    pub fn enterabs<F>(&self, time: TimeOf<C>, priority: Priority, action: F) -> EventId<TimeOf<C>>
    where
        F: FnOnce(&Self) -> std::result::Result<(), BoxError> + 'static,
    {
        let sequence = self.next_sequence.get();
        self.next_sequence.set(sequence + 1);

        let id = EventId::new(time, priority, sequence);
        self.queue
            .borrow_mut()
            .insert(Event::new(id, Box::new(action) as Action<C, W>));
        debug!(sequence, priority, ?time, "event scheduled");
        id
    }

    /// Schedules `action` `delay` after the clock's current time. Zero and
    /// negative delays are due immediately.
    pub fn enter<F>(&self, delay: DeltaOf<C>, priority: Priority, action: F) -> EventId<TimeOf<C>>
    where
        F: FnOnce(&Self) -> std::result::Result<(), BoxError> + 'static,
    {
        let time = self.clock.now().shifted(delay);
        self.enterabs(time, priority, action)
    }

    /// Removes a pending event. Fails with [`SchedError::NotFound`] when the
    /// event already ran, was already cancelled, or never belonged here.
    pub fn cancel(&self, id: &EventId<TimeOf<C>>) -> Result<()> {
        self.queue.borrow_mut().remove(id)?;
        debug!(sequence = id.sequence(), "event cancelled");
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Handles of the pending events in the order they would run.
    pub fn queue(&self) -> Vec<EventId<TimeOf<C>>> {
        self.queue.borrow().snapshot()
    }

    /// Runs due events.
    ///
    /// Blocking: waits for and runs events until the queue is empty, then
    /// returns `Ok(None)`. Non-blocking: runs every event that is already
    /// due, then returns the deadline of the next one (`None` when the
    /// queue drained).
    ///
    /// The earliest event is looked up afresh on every iteration, because
    /// the waiter and the actions may add or cancel events. An event leaves
    /// the queue before its action is invoked, so when an action or the
    /// waiter fails, the error is returned with the queue intact and `run`
    /// can be called again.
    pub fn run(&self, blocking: bool) -> Result<Option<TimeOf<C>>> {
        loop {
            let next = self.queue.borrow().peek_min().map(|event| event.id);
            let Some(id) = next else {
                trace!("queue drained");
                return Ok(None);
            };

            let delta = self.clock.now().until(id.time());
            if delta > <TimeOf<C> as Timestamp>::zero_delta() {
                if !blocking {
                    trace!(deadline = ?id.time(), "next event not due");
                    return Ok(Some(id.time()));
                }
                trace!(?delta, sequence = id.sequence(), "waiting for next event");
                self.wait(delta)?;
                continue;
            }

            let event = self.queue.borrow_mut().remove(&id)?;
            debug!(sequence = id.sequence(), priority = id.priority(), "running event");
            if let Err(source) = (event.action)(self) {
                warn!(sequence = id.sequence(), error = %source, "event action failed");
                return Err(SchedError::Action {
                    sequence: id.sequence(),
                    source,
                });
            }
            self.wait(<TimeOf<C> as Timestamp>::zero_delta())?;
        }
    }

    fn wait(&self, delta: DeltaOf<C>) -> Result<()> {
        self.waiter.wait(delta).map_err(|source| {
            warn!(error = %source, "delay source failed");
            SchedError::Wait(source)
        })
    }
}

impl<C, W> fmt::Debug for Scheduler<C, W>
where
    C: Clock + fmt::Debug,
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("clock", &self.clock)
            .field("waiter", &self.waiter)
            .field("queue", &self.queue.borrow())
            .field("next_sequence", &self.next_sequence.get())
            .finish()
    }
}
