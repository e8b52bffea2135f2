use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::node::HuffmanNode;
use crate::symbol::Symbol;

/// A queued subtree, ordered by `(frequency, sequence)`.
///
/// `sequence` is the arrival order into the queue: leaves get theirs in
/// frequency-table order, merged nodes get the next free number when they
/// are pushed back. Equal frequencies therefore leave the queue oldest
/// first.
struct Queued<S: Symbol> {
    frequency: usize,
    sequence: usize,
    node: HuffmanNode<S>,
}

impl<S: Symbol> Queued<S> {
    fn key(&self) -> (usize, usize) {
        (self.frequency, self.sequence)
    }
}

impl<S: Symbol> PartialEq for Queued<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S: Symbol> Eq for Queued<S> {}

impl<S: Symbol> PartialOrd for Queued<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Symbol> Ord for Queued<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-priority queue of subtrees used by the greedy merge.
struct MergeQueue<S: Symbol> {
    heap: BinaryHeap<Reverse<Queued<S>>>,
    next_sequence: usize,
}

impl<S: Symbol> MergeQueue<S> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    fn push(&mut self, node: HuffmanNode<S>) {
        let queued = Queued {
            frequency: node.frequency(),
            sequence: self.next_sequence,
            node,
        };
        self.next_sequence += 1;
        self.heap.push(Reverse(queued));
    }

    fn pop(&mut self) -> Option<HuffmanNode<S>> {
        self.heap.pop().map(|Reverse(queued)| queued.node)
    }
}

/// Build a Huffman tree from a frequency table by repeatedly merging the two
/// lowest-frequency subtrees until a single root remains.
///
/// A table with one distinct symbol yields that symbol's leaf as the root.
/// An empty table is an error.
pub fn build_tree<S: Symbol>(frequencies: &FrequencyTable<S>) -> Result<HuffmanNode<S>> {
    let mut queue = MergeQueue::with_capacity(frequencies.len());
    for (symbol, count) in frequencies.iter() {
        queue.push(HuffmanNode::leaf(*symbol, count));
    }

    let mut merges = 0;
    while let Some(left) = queue.pop() {
        let Some(right) = queue.pop() else {
            log::debug!(
                "built tree: {} leaves, {} merges, root frequency {}",
                frequencies.len(),
                merges,
                left.frequency()
            );
            return Ok(left);
        };
        merges += 1;
        log::trace!(
            "merge {merges}: {} + {} -> {}",
            left.frequency(),
            right.frequency(),
            left.frequency() + right.frequency()
        );
        queue.push(HuffmanNode::merge(left, right, merges));
    }

    Err(HuffmanError::EmptyInput)
}
