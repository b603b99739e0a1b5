use std::path::Path;

use tracing::info;

use super::scheduler::{DeltaOf, Scheduler};
use crate::clock::{Clock, EpochClock, FloatClock, UtcClock};
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::waiter::{SleepWaiter, Waiter};

/// Builder for the scheduler
///
/// Starts from the real-time defaults (UTC clock, sleeping waiter) and lets
/// either side be swapped. Configuration only shapes the built-in real-time
/// sources; custom sources are used as given.
pub struct SchedulerBuilder<C = UtcClock, W = SleepWaiter> {
    config: SchedulerConfig,
    clock: C,
    waiter: W,
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulerBuilder {
    /// Create a new scheduler builder with default config
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            clock: UtcClock,
            waiter: SleepWaiter::default(),
        }
    }

    /// Create with an already loaded config
    pub fn with_config(config: SchedulerConfig) -> Result<Self> {
        let waiter = SleepWaiter::new(config.time_unit).with_max_wait(config.max_wait()?);
        Ok(Self {
            config,
            clock: UtcClock,
            waiter,
        })
    }

    /// Create with TOML config file
    pub fn with_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_config(SchedulerConfig::from_toml(path)?)
    }

    /// Create with YAML config file
    pub fn with_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_config(SchedulerConfig::from_yaml(path)?)
    }
}

impl<C, W> SchedulerBuilder<C, W> {
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Use real time as fractional configured units since the epoch.
    pub fn float_clock(self) -> SchedulerBuilder<FloatClock, W> {
        let clock = FloatClock::new(self.config.time_unit);
        self.time_source(clock)
    }

    /// Use real time as whole configured units since the epoch.
    pub fn epoch_clock(self) -> SchedulerBuilder<EpochClock, W> {
        let clock = EpochClock::new(self.config.time_unit);
        self.time_source(clock)
    }

    pub fn time_source<C2>(self, clock: C2) -> SchedulerBuilder<C2, W> {
        SchedulerBuilder {
            config: self.config,
            clock,
            waiter: self.waiter,
        }
    }

    pub fn delay_source<W2>(self, waiter: W2) -> SchedulerBuilder<C, W2> {
        SchedulerBuilder {
            config: self.config,
            clock: self.clock,
            waiter,
        }
    }

    /// Build the scheduler with an empty queue
    pub fn build(self) -> Scheduler<C, W>
    where
        C: Clock,
        W: Waiter<DeltaOf<C>>,
    {
        info!(
            clock = std::any::type_name::<C>(),
            waiter = std::any::type_name::<W>(),
            time_unit = ?self.config.time_unit,
            max_wait = ?self.config.max_wait,
            "Building scheduler"
        );
        Scheduler::new(self.clock, self.waiter)
    }
}
