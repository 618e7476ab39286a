//! Frontier for the label-setting search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::distance::TentativeDistance;
use super::numtraits::IntoOrd;

/// Priority queue of tentative distances, the one with the smallest
/// priority is extracted first. Equal priorities come out in insertion order.
///
/// There is no decrease-key: an improved record is simply pushed again and
/// the outdated one stays in the queue. The search skips such stale entries
/// when it extracts a node that is already settled.
pub(super) struct Frontier<N, E> {
    queue: BinaryHeap<Entry<N, E>>,
    /// Insertion counter, used as tie-break.
    pushed: u64,
}

struct Entry<N, E> {
    key: i64,
    seq: u64,
    distance: TentativeDistance<N, E>,
}

impl<N, E> Frontier<N, E> {
    /// Create new empty instance.
    pub fn with_capacity(capacity: usize) -> Frontier<N, E> {
        Frontier {
            queue: BinaryHeap::with_capacity(capacity),
            pushed: 0,
        }
    }

    /// Insert a record into the priority queue.
    pub fn push(&mut self, distance: TentativeDistance<N, E>) {
        let entry = Entry {
            key: distance.priority().into_ord(),
            seq: self.pushed,
            distance,
        };
        self.pushed += 1;
        self.queue.push(entry);
    }

    /// Extract the record with the least priority from the queue.
    pub fn pop(&mut self) -> Option<TentativeDistance<N, E>> {
        self.queue.pop().map(|entry| entry.distance)
    }

    /// Number of entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

// `BinaryHeap` is a max-heap, so the order is inverted: smaller key (then
// earlier insertion) means greater entry.
impl<N, E> Ord for Entry<N, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N, E> PartialOrd for Entry<N, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, E> PartialEq for Entry<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<N, E> Eq for Entry<N, E> {}
