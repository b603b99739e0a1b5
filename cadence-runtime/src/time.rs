//! Timestamp arithmetic shared by clocks, waiters and the event store.
//!
//! A scheduler only ever needs three things from its notion of time: a total
//! order (to key the store), the signed distance between two instants (to
//! decide whether an event is due and how long to wait), and shifting an
//! instant by such a distance (to turn a relative delay into an absolute
//! time).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, TimeDelta, Utc};

/// An absolute point on a scheduler's time line.
pub trait Timestamp: Copy + Ord + Hash + fmt::Debug {
    /// Signed distance between two timestamps.
    type Delta: Copy + PartialOrd + fmt::Debug;

    fn zero_delta() -> Self::Delta;

    /// `later - self`. Negative when `later` is in the past.
    fn until(self, later: Self) -> Self::Delta;

    /// `self + delta`.
    fn shifted(self, delta: Self::Delta) -> Self;
}

/// Integer ticks. Arithmetic saturates at the ends of the range.
impl Timestamp for i64 {
    type Delta = i64;

    fn zero_delta() -> i64 {
        0
    }

    fn until(self, later: i64) -> i64 {
        later.saturating_sub(self)
    }

    fn shifted(self, delta: i64) -> i64 {
        self.saturating_add(delta)
    }
}

impl Timestamp for DateTime<Utc> {
    type Delta = TimeDelta;

    fn zero_delta() -> TimeDelta {
        TimeDelta::zero()
    }

    fn until(self, later: Self) -> TimeDelta {
        later.signed_duration_since(self)
    }

    fn shifted(self, delta: TimeDelta) -> Self {
        self.checked_add_signed(delta).unwrap_or(if delta < TimeDelta::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }
}

/// Floating point time with a total order.
///
/// Ordering follows [`f64::total_cmp`] and hashing follows the bit pattern,
/// both after folding `-0.0` into `0.0`, so `FloatTime` can key ordered and
/// hashed collections. Deltas are plain `f64`.
#[derive(Clone, Copy, Default)]
pub struct FloatTime(pub f64);

impl FloatTime {
    pub fn value(self) -> f64 {
        self.0
    }

    /// `-0.0` and `0.0` are the same instant.
    fn canonical(self) -> f64 {
        self.0 + 0.0
    }
}

impl From<f64> for FloatTime {
    fn from(value: f64) -> Self {
        FloatTime(value)
    }
}

impl From<FloatTime> for f64 {
    fn from(time: FloatTime) -> Self {
        time.0
    }
}

impl PartialEq for FloatTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatTime {}

impl PartialOrd for FloatTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

impl Hash for FloatTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state);
    }
}

impl fmt::Debug for FloatTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for FloatTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Timestamp for FloatTime {
    type Delta = f64;

    fn zero_delta() -> f64 {
        0.0
    }

    fn until(self, later: Self) -> f64 {
        later.0 - self.0
    }

    fn shifted(self, delta: f64) -> Self {
        FloatTime(self.0 + delta)
    }
}
