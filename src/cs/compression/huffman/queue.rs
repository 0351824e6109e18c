use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::tree::HuffmanTree;

/// A tree waiting in the queue, stamped with its insertion sequence number.
#[derive(Debug)]
struct Entry {
    tree: HuffmanTree,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.tree.weight() == other.tree.weight() && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse: lower weight first, then earlier insertion.
        other
            .tree
            .weight()
            .cmp(&self.tree.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of partial Huffman trees ordered by weight.
///
/// Ties between equal weights go to the tree inserted earlier, so the
/// same sequence of inserts always yields the same sequence of removals.
#[derive(Debug, Default)]
pub struct TreeQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl TreeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tree: HuffmanTree) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { tree, seq });
    }

    /// Removes the lightest tree, or `None` when the queue is empty.
    pub fn remove_min(&mut self) -> Option<HuffmanTree> {
        self.heap.pop().map(|entry| entry.tree)
    }

    /// Weight of the tree [`remove_min`](Self::remove_min) would return.
    pub fn peek_weight(&self) -> Option<usize> {
        self.heap.peek().map(|entry| entry.tree.weight())
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
