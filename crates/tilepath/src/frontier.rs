use std::collections::BinaryHeap;

use crate::traits::Cost;

/// Heap entry for a frontier node, ordered by total cost and then by the
/// sequence number the node received when it first joined the frontier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FrontierEntry<N> {
    pub(crate) total: Cost,
    pub(crate) seq: usize,
    pub(crate) node: N,
}

impl<N: Eq> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest total first, and the
        // earliest arrival among equal totals.
        other
            .total
            .cmp(&self.total)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N: Eq> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set as a lazy-deletion priority queue.
///
/// A cheaper path to a node already queued pushes a second entry with the
/// node's original sequence number; the older, costlier entry surfaces after
/// the node has been expanded and is dropped by the caller.
#[derive(Debug)]
pub(crate) struct Frontier<N> {
    heap: BinaryHeap<FrontierEntry<N>>,
    next_seq: usize,
}

impl<N: Eq> Frontier<N> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    /// Queue a newly discovered node and return its sequence number.
    pub(crate) fn insert(&mut self, node: N, total: Cost) -> usize {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { total, seq, node });
        seq
    }

    /// Re-queue a node whose total dropped, keeping its arrival order.
    pub(crate) fn requeue(&mut self, node: N, total: Cost, seq: usize) {
        self.heap.push(FrontierEntry { total, seq, node });
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierEntry<N>> {
        self.heap.pop()
    }
}
