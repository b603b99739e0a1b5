//! # Cadence - In-process Event Scheduling for Rust
//!
//! A scheduler keeps a queue of events, each an action due at some time
//! with some priority, and a run loop that executes them in order. It asks
//! two pluggable sources about the outside world: a [`Clock`] for the
//! current time and a [`Waiter`] to pass time until the next event is due.
//! Real-time sources run events on the wall clock; simulated sources make
//! runs instant and deterministic.
//!
//! ## Features
//!
//! - **Ordering**: events run by time, then priority (lower first), then
//!   insertion order
//! - **Cancellation**: every event gets a handle that cancels it while pending
//! - **Re-entrancy**: actions receive the scheduler and may schedule or
//!   cancel further events while the loop runs
//! - **Non-blocking runs**: run what is due and get the next deadline back
//! - **Any time line**: integer ticks, floating point time or UTC instants
//! - **Config support**: tune the real-time sources from TOML or YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use cadence::{simulated, Scheduler};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let (clock, waiter) = simulated(0_i64);
//! let scheduler = Scheduler::new(clock, waiter);
//! let log = Rc::new(RefCell::new(Vec::new()));
//!
//! for (delay, name) in [(5, "five"), (3, "three")] {
//!     let log = Rc::clone(&log);
//!     scheduler.enter(delay, 0, move |_| {
//!         log.borrow_mut().push(name);
//!         Ok(())
//!     });
//! }
//!
//! scheduler.run(true).unwrap();
//! assert_eq!(*log.borrow(), vec!["three", "five"]);
//! assert!(scheduler.is_empty());
//! ```
//!
//! ## Real time
//!
//! ```rust,no_run
//! use cadence::SchedulerBuilder;
//! use chrono::TimeDelta;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new().build();
//! scheduler.enter(TimeDelta::seconds(2), 0, |_| {
//!     println!("two seconds later");
//!     Ok(())
//! });
//! scheduler.run(true)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Create `config/scheduler.toml`:
//!
//! ```toml
//! [scheduler]
//! time_unit = "milliseconds"
//! max_wait = "500ms"
//! ```
//!
//! Or `config/scheduler.yaml`:
//!
//! ```yaml
//! scheduler:
//!   time_unit: milliseconds
//!   max_wait: 500ms
//! ```
//!
//! You can also use environment variables with `CADENCE_` prefix:
//!
//! ```bash
//! export CADENCE_SCHEDULER__MAX_WAIT=250ms
//! ```

// Re-export core types
pub use cadence_runtime::{
    load_toml_config, load_yaml_config, simulated, BoxError, Clock, DeltaOf, EpochClock, Event,
    EventId, EventStore, FloatClock, FloatTime, Priority, SchedError, Scheduler,
    SchedulerBuilder, SchedulerConfig, SimClock, SimWaiter, SleepWaiter, TimeOf, TimeUnit,
    Timestamp, UtcClock, Waiter,
};

// Make cadence_runtime available for lower-level use
pub use cadence_runtime;
