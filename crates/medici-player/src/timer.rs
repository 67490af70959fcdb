//! Timer queue - the player's only source of suspension.
//!
//! Time is logical: a `Duration` since whatever epoch the driver chose.
//! Nothing here reads a clock, so tests drive time by hand.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

/// A pending wake-up.
#[derive(Debug)]
struct Pending<E> {
    due: Duration,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Pending<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Pending<E> {}

impl<E> PartialOrd for Pending<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Pending<E> {
    // Reversed: `BinaryHeap` is a max-heap and we want the earliest first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-heap of timed events.
///
/// Events with the same due time pop in the order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<E> {
    heap: BinaryHeap<Pending<E>>,
    next_seq: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire at `due`.
    pub fn schedule(&mut self, due: Duration, event: E) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.heap.push(Pending { due, seq, event });
    }

    /// Due time of the earliest pending event.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.heap.peek().map(|p| p.due)
    }

    /// Remove and return the earliest event if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        if self.heap.peek().is_some_and(|p| p.due <= now) {
            self.heap.pop().map(|p| (p.due, p.event))
        } else {
            None
        }
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
