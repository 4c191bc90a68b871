//! The set of discovered nodes awaiting expansion.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::algorithm::FrontierKind;

/// Heap entry ordered by `priority`, then by insertion order.
///
/// `cost` is the accumulated cost the node had when it was pushed; the
/// engine compares it against the cost map to recognise stale duplicates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry<N> {
    pub(crate) node: N,
    pub(crate) cost: f32,
    priority: f32,
    seq: u64,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Entry<N> {}

impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest push.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
enum Store<N> {
    Stack(Vec<Entry<N>>),
    Queue(VecDeque<Entry<N>>),
    Heap(BinaryHeap<Entry<N>>),
}

/// Stack, FIFO queue or min-priority queue, chosen by algorithm.
///
/// Nodes are never reprioritised in place: a cheaper route is pushed as a
/// fresh entry and the old one stays behind as a stale duplicate.
#[derive(Debug)]
pub(crate) struct Frontier<N> {
    store: Store<N>,
    seq: u64,
}

impl<N: Copy> Frontier<N> {
    pub(crate) fn new(kind: FrontierKind) -> Self {
        let store = match kind {
            FrontierKind::Stack => Store::Stack(Vec::new()),
            FrontierKind::Queue => Store::Queue(VecDeque::new()),
            FrontierKind::Priority => Store::Heap(BinaryHeap::new()),
        };
        Self { store, seq: 0 }
    }

    /// Push `node`. `priority` is ignored by stacks and queues.
    pub(crate) fn push(&mut self, node: N, cost: f32, priority: f32) {
        let entry = Entry {
            node,
            cost,
            priority,
            seq: self.seq,
        };
        self.seq += 1;
        match &mut self.store {
            Store::Stack(s) => s.push(entry),
            Store::Queue(q) => q.push_back(entry),
            Store::Heap(h) => h.push(entry),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Entry<N>> {
        match &mut self.store {
            Store::Stack(s) => s.pop(),
            Store::Queue(q) => q.pop_front(),
            Store::Heap(h) => h.pop(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn len(&self) -> usize {
        match &self.store {
            Store::Stack(s) => s.len(),
            Store::Queue(q) => q.len(),
            Store::Heap(h) => h.len(),
        }
    }
}
