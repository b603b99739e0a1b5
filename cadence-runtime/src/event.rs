use std::fmt;

/// Lower values run first among events due at the same time.
pub type Priority = i32;

/// Handle of a scheduled event.
///
/// Ordering is the execution order: time, then priority, then insertion
/// sequence. The sequence is unique per scheduler, which makes the handle
/// unique as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId<T> {
    time: T,
    priority: Priority,
    sequence: u64,
}

impl<T: Copy> EventId<T> {
    pub fn new(time: T, priority: Priority, sequence: u64) -> Self {
        Self {
            time,
            priority,
            sequence,
        }
    }

    pub fn time(&self) -> T {
        self.time
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// A pending unit of work: its handle plus the action bound at scheduling
/// time.
pub struct Event<T, A> {
    pub id: EventId<T>,
    pub action: A,
}

impl<T: Copy, A> Event<T, A> {
    pub fn new(id: EventId<T>, action: A) -> Self {
        Self { id, action }
    }
}

impl<T: fmt::Debug, A> fmt::Debug for Event<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_sort_by_time_then_priority_then_sequence() {
        let mut ids = vec![
            EventId::new(5, 0, 0),
            EventId::new(3, 1, 1),
            EventId::new(3, 0, 2),
            EventId::new(3, 0, 3),
        ];
        ids.sort();
        let order: Vec<u64> = ids.iter().map(EventId::sequence).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }
}
