use crate::graph::frontier::FrontierSelector;
use crate::graph::types::Cost;

/// Frontier kept as a plain list in insertion order.
///
/// `pop_min` scans every member, so a full solve is O(V²). Keys are stored
/// per node, which makes `decrease_key` O(1).
#[derive(Debug, Clone, Default)]
pub struct LinearScanSelector {
    members: Vec<usize>,
    keys: Vec<Cost>,
    present: Vec<bool>,
}

impl LinearScanSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LinearScanSelector {
            members: Vec::with_capacity(capacity),
            keys: vec![Cost::INFINITY; capacity],
            present: vec![false; capacity],
        }
    }

    fn ensure_slot(&mut self, node: usize) {
        if node >= self.keys.len() {
            self.keys.resize(node + 1, Cost::INFINITY);
            self.present.resize(node + 1, false);
        }
    }
}

impl FrontierSelector for LinearScanSelector {
    fn insert(&mut self, node: usize, key: Cost) {
        self.ensure_slot(node);
        if self.present[node] {
            return;
        }
        self.present[node] = true;
        self.keys[node] = key;
        self.members.push(node);
    }

    fn pop_min(&mut self) -> Option<(usize, Cost)> {
        let mut best: Option<(usize, Cost)> = None;
        for (pos, &node) in self.members.iter().enumerate() {
            let key = self.keys[node];
            // Strict comparison keeps the earliest member on ties
            if best.is_none_or(|(_, best_key)| key < best_key) {
                best = Some((pos, key));
            }
        }

        let (pos, key) = best?;
        let node = self.members.remove(pos);
        self.present[node] = false;
        Some((node, key))
    }

    fn decrease_key(&mut self, node: usize, key: Cost) {
        if self.contains(node) && key < self.keys[node] {
            self.keys[node] = key;
        }
    }

    fn contains(&self, node: usize) -> bool {
        self.present.get(node).copied().unwrap_or(false)
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}
