//! Cadence Runtime - Core runtime for in-process event scheduling
//!
//! This crate provides the event queue, the run loop that drains it, and
//! the time and delay sources the loop is parametrized with.

mod clock;
mod config;
mod error;
mod event;
mod scheduler;
mod sim;
mod store;
mod time;
mod time_unit;
mod waiter;

// Re-export public API
pub use clock::{Clock, EpochClock, FloatClock, UtcClock};
pub use crate::config::{load_toml_config, load_yaml_config, SchedulerConfig};
pub use error::{BoxError, Result, SchedError};
pub use event::{Event, EventId, Priority};
pub use scheduler::{Action, DeltaOf, Scheduler, SchedulerBuilder, TimeOf};
pub use sim::{simulated, SimClock, SimWaiter};
pub use store::EventStore;
pub use time::{FloatTime, Timestamp};
pub use time_unit::TimeUnit;
pub use waiter::{SleepWaiter, Waiter};
