//! Ordered storage for pending events.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, SchedError};
use crate::event::{Event, EventId};

/// Pending events ordered by `(time, priority, sequence)`.
///
/// Backed by a `BTreeMap` keyed by the handle itself, so insertion,
/// minimum lookup, minimum removal and removal by handle are all
/// `O(log n)`, and draining yields events in sort-key order whatever the
/// insertion order was.
pub struct EventStore<T, A> {
    events: BTreeMap<EventId<T>, Event<T, A>>,
}

impl<T: fmt::Debug, A> fmt::Debug for EventStore<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.events.keys()).finish()
    }
}

impl<T: Ord + Copy, A> Default for EventStore<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Copy, A> EventStore<T, A> {
    pub fn new() -> Self {
        Self {
            events: BTreeMap::new(),
        }
    }

    /// Adds an event. A handle already present is replaced; sequences are
    /// unique per scheduler so this does not happen through [`Scheduler`].
    ///
    /// [`Scheduler`]: crate::Scheduler
    pub fn insert(&mut self, event: Event<T, A>) {
        self.events.insert(event.id, event);
    }

    /// Earliest event, left in place.
    pub fn peek_min(&self) -> Option<&Event<T, A>> {
        self.events.first_key_value().map(|(_, event)| event)
    }

    /// Removes and returns the earliest event.
    pub fn pop_min(&mut self) -> Option<Event<T, A>> {
        self.events.pop_first().map(|(_, event)| event)
    }

    /// Removes the event named by `id`.
    pub fn remove(&mut self, id: &EventId<T>) -> Result<Event<T, A>> {
        self.events.remove(id).ok_or(SchedError::NotFound {
            sequence: id.sequence(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Handles of all pending events in execution order.
    pub fn snapshot(&self) -> Vec<EventId<T>> {
        self.events.keys().copied().collect()
    }

    /// Pending events in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &Event<T, A>> {
        self.events.values()
    }
}
