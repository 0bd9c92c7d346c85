use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, HashSet};

/// Per-call traversal state: visited marks and came-from links.
///
/// A traversal creates one, and drops it on return.
/// Nothing has to be reset afterwards.
#[derive(Debug, Clone)]
pub struct Marks {
    visited: HashSet<VertexId, RandomState>,
    came_from: HashMap<VertexId, VertexId, RandomState>,
}

impl Default for Marks {
    fn default() -> Self {
        Self::new()
    }
}

impl Marks {
    pub fn new() -> Self {
        Self {
            visited: HashSet::with_hasher(RandomState::new()),
            came_from: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            visited: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
            came_from: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Marks `v` as visited. Returns `false` if it was already.
    pub fn set_visited(&mut self, v: VertexId) -> bool {
        self.visited.insert(v)
    }

    pub fn set_not_visited(&mut self, v: &VertexId) {
        self.visited.remove(v);
    }

    pub fn is_visited(&self, v: &VertexId) -> bool {
        self.visited.contains(v)
    }

    /// Records that `v` was discovered from `from`.
    pub fn set_came_from(&mut self, v: VertexId, from: VertexId) {
        self.came_from.insert(v, from);
    }

    pub fn undo_came_from(&mut self, v: &VertexId) {
        self.came_from.remove(v);
    }

    pub fn came_from(&self, v: &VertexId) -> Option<VertexId> {
        self.came_from.get(v).copied()
    }
}
