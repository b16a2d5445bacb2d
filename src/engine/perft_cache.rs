use crate::core::Orientation;
use std::collections::HashMap;

/// Cache de resultados perft
pub struct PerftCache {
    table: HashMap<(u64, Orientation, u32), u64>, // (hash, a mover, depth) -> folhas
    hits: u64,
    misses: u64,
}

impl PerftCache {
    pub fn new() -> Self {
        PerftCache {
            table: HashMap::with_capacity(1 << 14),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&mut self, hash: u64, to_move: Orientation, depth: u32) -> Option<u64> {
        if let Some(&nodes) = self.table.get(&(hash, to_move, depth)) {
            self.hits += 1;
            Some(nodes)
        } else {
            self.misses += 1;
            None
        }
    }

    pub fn insert(&mut self, hash: u64, to_move: Orientation, depth: u32, nodes: u64) {
        self.table.insert((hash, to_move, depth), nodes);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for PerftCache {
    fn default() -> Self {
        Self::new()
    }
}
