//! End-to-end scheduling scenarios on simulated time.

use std::cell::RefCell;
use std::rc::Rc;

use cadence::{
    simulated, BoxError, Clock, EventId, FloatTime, SchedError, Scheduler, SimClock, SimWaiter,
};
use chrono::{DateTime, TimeDelta, Utc};

type Log = Rc<RefCell<Vec<&'static str>>>;
type SimScheduler = Scheduler<SimClock<i64>, SimWaiter<i64>>;

fn sim_scheduler(start: i64) -> (SimScheduler, SimWaiter<i64>) {
    let (clock, waiter) = simulated(start);
    (Scheduler::new(clock, waiter.clone()), waiter)
}

/// Action that appends `name` to the log.
fn record(log: &Log, name: &'static str) -> impl FnOnce(&SimScheduler) -> Result<(), BoxError> {
    let log = Rc::clone(log);
    move |_: &SimScheduler| {
        log.borrow_mut().push(name);
        Ok(())
    }
}

#[test]
fn same_time_events_run_by_priority_then_insertion() {
    let (scheduler, _) = sim_scheduler(0);
    let log = Log::default();

    scheduler.enterabs(5, 0, record(&log, "t5-p0"));
    scheduler.enterabs(3, 1, record(&log, "t3-p1"));
    scheduler.enterabs(3, 0, record(&log, "t3-p0"));

    assert_eq!(scheduler.run(true).unwrap(), None);
    assert_eq!(*log.borrow(), vec!["t3-p0", "t3-p1", "t5-p0"]);
}

#[test]
fn equal_time_and_priority_keep_insertion_order() {
    let (scheduler, _) = sim_scheduler(0);
    let log = Log::default();

    scheduler.enterabs(4, 2, record(&log, "first"));
    scheduler.enterabs(4, 2, record(&log, "second"));
    scheduler.enterabs(4, 2, record(&log, "third"));

    scheduler.run(true).unwrap();
    assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn negative_delay_runs_without_waiting() {
    let (scheduler, waiter) = sim_scheduler(100);
    let log = Log::default();

    scheduler.enter(-1, 0, record(&log, "overdue"));
    scheduler.run(true).unwrap();

    assert_eq!(*log.borrow(), vec!["overdue"]);
    // Only the yield after the action, never a real wait.
    assert_eq!(waiter.waits(), vec![0]);
    assert_eq!(scheduler.clock().now(), 100);
}

#[test]
fn past_absolute_time_is_immediately_due() {
    let (scheduler, waiter) = sim_scheduler(50);
    let log = Log::default();

    scheduler.enterabs(-10, 0, record(&log, "long ago"));
    scheduler.run(true).unwrap();

    assert_eq!(*log.borrow(), vec!["long ago"]);
    assert_eq!(waiter.waits(), vec![0]);
}

#[test]
fn non_blocking_run_reports_deadline_without_side_effects() {
    let (scheduler, waiter) = sim_scheduler(0);
    let log = Log::default();

    let id = scheduler.enter(10, 0, record(&log, "later"));
    let before = scheduler.queue();

    assert_eq!(scheduler.run(false).unwrap(), Some(10));
    assert_eq!(scheduler.queue(), before);
    assert_eq!(scheduler.queue(), vec![id]);
    assert!(log.borrow().is_empty());
    assert!(waiter.waits().is_empty());
    assert_eq!(scheduler.clock().now(), 0);
}

#[test]
fn non_blocking_run_executes_due_events_first() {
    let (scheduler, waiter) = sim_scheduler(0);
    let log = Log::default();

    scheduler.enter(0, 0, record(&log, "now"));
    scheduler.enter(-3, 0, record(&log, "overdue"));
    scheduler.enter(7, 0, record(&log, "later"));

    assert_eq!(scheduler.run(false).unwrap(), Some(7));
    assert_eq!(*log.borrow(), vec!["overdue", "now"]);
    assert_eq!(scheduler.len(), 1);
    assert_eq!(waiter.waits(), vec![0, 0]);
}

#[test]
fn non_blocking_run_on_empty_queue_returns_none() {
    let (scheduler, _) = sim_scheduler(0);
    assert_eq!(scheduler.run(false).unwrap(), None);
    assert!(scheduler.is_empty());
}

#[test]
fn blocking_run_waits_for_each_event() {
    let (scheduler, waiter) = sim_scheduler(0);
    let log = Log::default();

    scheduler.enter(4, 0, record(&log, "a"));
    scheduler.enter(10, 0, record(&log, "b"));
    scheduler.run(true).unwrap();

    assert_eq!(*log.borrow(), vec!["a", "b"]);
    assert_eq!(waiter.waits(), vec![4, 0, 6, 0]);
    assert_eq!(scheduler.clock().now(), 10);
    assert!(scheduler.is_empty());
}

#[test]
fn cancelled_event_never_runs() {
    let (scheduler, _) = sim_scheduler(0);
    let log = Log::default();

    scheduler.enter(1, 0, record(&log, "kept"));
    let doomed = scheduler.enter(5, 0, record(&log, "cancelled"));
    scheduler.enter(9, 0, record(&log, "also kept"));

    scheduler.cancel(&doomed).unwrap();
    assert!(!scheduler.queue().contains(&doomed));

    assert_eq!(scheduler.run(true).unwrap(), None);
    assert_eq!(*log.borrow(), vec!["kept", "also kept"]);
}

#[test]
fn cancel_of_non_pending_event_is_not_found() {
    let (scheduler, _) = sim_scheduler(0);
    let log = Log::default();

    let ran = scheduler.enter(0, 0, record(&log, "ran"));
    let cancelled = scheduler.enter(3, 0, record(&log, "cancelled"));
    scheduler.cancel(&cancelled).unwrap();
    scheduler.run(true).unwrap();

    assert!(matches!(
        scheduler.cancel(&ran),
        Err(SchedError::NotFound { sequence: 0 })
    ));
    assert!(matches!(
        scheduler.cancel(&cancelled),
        Err(SchedError::NotFound { sequence: 1 })
    ));
    let never_scheduled = EventId::new(3, 0, 99);
    assert!(matches!(
        scheduler.cancel(&never_scheduled),
        Err(SchedError::NotFound { sequence: 99 })
    ));
}

#[test]
fn queue_lists_pending_events_in_execution_order() {
    let (scheduler, _) = sim_scheduler(0);
    let log = Log::default();

    let late = scheduler.enterabs(8, 0, record(&log, "late"));
    let low = scheduler.enterabs(2, 5, record(&log, "low"));
    let high = scheduler.enterabs(2, -5, record(&log, "high"));

    let queue = scheduler.queue();
    assert_eq!(queue, vec![high, low, late]);
    assert_eq!(queue[0].time(), 2);
    assert_eq!(queue[0].priority(), -5);
    assert_eq!(queue[2].sequence(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn emptiness_after_full_drain() {
    let (scheduler, _) = sim_scheduler(0);
    let log = Log::default();
    assert!(scheduler.is_empty());

    for delay in [3, 1, 2] {
        scheduler.enter(delay, 0, record(&log, "tick"));
    }
    assert!(!scheduler.is_empty());
    assert_eq!(scheduler.len(), 3);

    scheduler.run(true).unwrap();
    assert!(scheduler.is_empty());
    assert_eq!(scheduler.run(true).unwrap(), None);
}

#[test]
fn float_time_line() {
    let (clock, waiter) = simulated(FloatTime(0.0));
    let scheduler = Scheduler::new(clock, waiter.clone());
    let log = Log::default();

    for (delay, name) in [(0.75, "b"), (0.25, "a"), (1.5, "c")] {
        let log = Rc::clone(&log);
        scheduler.enter(delay, 0, move |_| {
            log.borrow_mut().push(name);
            Ok(())
        });
    }

    assert_eq!(scheduler.run(false).unwrap(), Some(FloatTime(0.25)));
    scheduler.run(true).unwrap();
    assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    assert_eq!(scheduler.clock().now(), FloatTime(1.5));
}

#[test]
fn float_signed_zeros_tie_on_priority() {
    let (clock, waiter) = simulated(FloatTime(0.0));
    let scheduler = Scheduler::new(clock, waiter);
    let log = Log::default();

    for (time, priority, name) in [(0.0, 0, "t=0.0 prio 0"), (-0.0, 1, "t=-0.0 prio 1")] {
        let log = Rc::clone(&log);
        scheduler.enterabs(FloatTime(time), priority, move |_| {
            log.borrow_mut().push(name);
            Ok(())
        });
    }

    scheduler.run(true).unwrap();
    assert_eq!(*log.borrow(), vec!["t=0.0 prio 0", "t=-0.0 prio 1"]);
}

#[test]
fn utc_time_line() {
    let start = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
    let (clock, waiter) = simulated(start);
    let scheduler = Scheduler::new(clock, waiter.clone());
    let log = Log::default();

    for (secs, name) in [(30, "half minute"), (5, "five seconds")] {
        let log = Rc::clone(&log);
        scheduler.enter(TimeDelta::seconds(secs), 0, move |_| {
            log.borrow_mut().push(name);
            Ok(())
        });
    }

    scheduler.run(true).unwrap();
    assert_eq!(*log.borrow(), vec!["five seconds", "half minute"]);
    assert_eq!(scheduler.clock().now(), start + TimeDelta::seconds(30));
    assert_eq!(
        waiter.waits(),
        vec![
            TimeDelta::seconds(5),
            TimeDelta::zero(),
            TimeDelta::seconds(25),
            TimeDelta::zero()
        ]
    );
}
