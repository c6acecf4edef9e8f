use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::frontier::FrontierSelector;
use crate::graph::types::Cost;

/// Heap entry ordered by key, then by insertion sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub key: Cost,
    pub seq: usize,
    pub node: usize,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Frontier backed by a binary min-heap.
///
/// `decrease_key` pushes a fresh entry instead of sifting in place; entries
/// whose node was already finalized, or whose key is no longer the node's
/// current key, are dropped when they surface in `pop_min`.
#[derive(Debug, Clone, Default)]
pub struct HeapSelector {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    keys: Vec<Cost>,
    seq: Vec<usize>,
    present: Vec<bool>,
    live: usize,
    next_seq: usize,
}

impl HeapSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        HeapSelector {
            heap: BinaryHeap::with_capacity(capacity),
            keys: vec![Cost::INFINITY; capacity],
            seq: vec![0; capacity],
            present: vec![false; capacity],
            live: 0,
            next_seq: 0,
        }
    }

    fn ensure_slot(&mut self, node: usize) {
        if node >= self.keys.len() {
            self.keys.resize(node + 1, Cost::INFINITY);
            self.seq.resize(node + 1, 0);
            self.present.resize(node + 1, false);
        }
    }

    fn push_entry(&mut self, node: usize, key: Cost) {
        self.heap.push(Reverse(HeapEntry {
            key,
            seq: self.seq[node],
            node,
        }));
    }

    /// Entries currently stored, stale ones included
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }
}

impl FrontierSelector for HeapSelector {
    fn insert(&mut self, node: usize, key: Cost) {
        self.ensure_slot(node);
        if self.present[node] {
            return;
        }
        self.present[node] = true;
        self.keys[node] = key;
        self.seq[node] = self.next_seq;
        self.next_seq += 1;
        self.live += 1;
        self.push_entry(node, key);
    }

    fn pop_min(&mut self) -> Option<(usize, Cost)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let node = entry.node;
            if !self.present[node] || self.keys[node] != entry.key {
                continue;
            }
            self.present[node] = false;
            self.live -= 1;
            return Some((node, entry.key));
        }
        None
    }

    fn decrease_key(&mut self, node: usize, key: Cost) {
        if self.contains(node) && key < self.keys[node] {
            self.keys[node] = key;
            self.push_entry(node, key);
        }
    }

    fn contains(&self, node: usize) -> bool {
        self.present.get(node).copied().unwrap_or(false)
    }

    fn len(&self) -> usize {
        self.live
    }
}
