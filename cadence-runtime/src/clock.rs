use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::time::{FloatTime, Timestamp};
use crate::time_unit::TimeUnit;

/// Time source for a scheduler.
///
/// The scheduler never checks that a clock is monotonic; a clock that runs
/// backwards only makes events become due later than expected.
pub trait Clock {
    type Time: Timestamp;

    /// Current time on this clock's time line.
    fn now(&self) -> Self::Time;
}

impl<C: Clock + ?Sized> Clock for &C {
    type Time = C::Time;

    fn now(&self) -> Self::Time {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    type Time = C::Time;

    fn now(&self) -> Self::Time {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    type Time = C::Time;

    fn now(&self) -> Self::Time {
        (**self).now()
    }
}

/// Real time as a UTC instant. The default time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    type Time = DateTime<Utc>;

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Real time as fractional `unit`s since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatClock {
    unit: TimeUnit,
}

impl FloatClock {
    pub fn new(unit: TimeUnit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}

impl Clock for FloatClock {
    type Time = FloatTime;

    fn now(&self) -> FloatTime {
        let micros = Utc::now().timestamp_micros() as f64;
        FloatTime(micros / 1_000_000.0 / self.unit.as_secs_f64())
    }
}

/// Real time as whole `unit`s since the Unix epoch, truncated.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpochClock {
    unit: TimeUnit,
}

impl EpochClock {
    pub fn new(unit: TimeUnit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}

impl Clock for EpochClock {
    type Time = i64;

    fn now(&self) -> i64 {
        let millis_per_unit = self.unit.to_millis(1) as i64;
        Utc::now().timestamp_millis().div_euclid(millis_per_unit)
    }
}
