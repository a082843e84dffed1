//! Min-priority queue used by the shortest-path search.
//!
//! Entries are stored in a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are dequeued first; ties come out in the order they were
//! enqueued (FIFO). The same element may be queued any number of times, which
//! lets the search push an improved distance instead of updating an entry in
//! place.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<E, P> {
    element: E,
    priority: P,
    /// Monotonically increasing; lower = enqueued earlier.
    seq: u64,
}

impl<E, P: Ord> PartialEq for Entry<E, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<E, P: Ord> Eq for Entry<E, P> {}

impl<E, P: Ord> PartialOrd for Entry<E, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E, P: Ord> Ord for Entry<E, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue of `(element, priority)` pairs.
///
/// Duplicates are kept: enqueuing an element that is already present adds a
/// second, independent entry.
#[derive(Debug)]
pub struct MinPriorityQueue<E, P = u64> {
    heap: BinaryHeap<Reverse<Entry<E, P>>>,
    seq: u64,
}

impl<E, P: Ord> MinPriorityQueue<E, P> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Create an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Insert `element` at `priority`.
    pub fn enqueue(&mut self, element: E, priority: P) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            element,
            priority,
            seq,
        }));
    }

    /// Remove the entry with the smallest priority (ties broken FIFO).
    ///
    /// Returns `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<(E, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.element, entry.priority))
    }

    /// The entry [`dequeue`](Self::dequeue) would return next.
    pub fn peek(&self) -> Option<(&E, &P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.element, &entry.priority))
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}

impl<E, P: Ord> Default for MinPriorityQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}
