//! Virtual clock for driving timed state machines without real timers.
//!
//! Events are kept in a min-heap ordered by due time, with an insertion
//! sequence number breaking ties so events due at the same instant come out
//! in the order they were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

/// An event waiting on the virtual clock
#[derive(Debug)]
struct Scheduled<E> {
    due: Duration,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Scheduled<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Scheduled<E> {}

impl<E> PartialOrd for Scheduled<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Scheduled<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first)
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Deterministic scheduler with manually advanced time
#[derive(Debug)]
pub struct VirtualClock<E> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Scheduled<E>>,
}

impl<E> Default for VirtualClock<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> VirtualClock<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time since the clock was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of events not yet fired
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queue `event` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Scheduled {
            due: self.now + delay,
            seq,
            event,
        });
    }

    /// Move time forward by `by`, returning every event that came due along
    /// with the instant it fired at.
    pub fn advance(&mut self, by: Duration) -> Vec<(Duration, E)> {
        let target = self.now + by;
        let mut fired = Vec::new();
        while let Some(next) = self.queue.peek() {
            if next.due > target {
                break;
            }
            if let Some(entry) = self.queue.pop() {
                self.now = entry.due;
                fired.push((entry.due, entry.event));
            }
        }
        self.now = target;
        fired
    }

    /// Jump straight to the next due event, if any.
    pub fn advance_to_next(&mut self) -> Option<(Duration, E)> {
        let entry = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some((entry.due, entry.event))
    }
}
