use std::hash::Hash;

use fxhash::FxHashSet;

use crate::network::connection::Cost;

/// Unordered, duplicate free set of edges forming a spanning tree.
#[derive(Debug, Clone)]
pub struct SpanningTree<E> {
    edges: FxHashSet<E>,
    total_cost: Cost,
}

impl<E> Default for SpanningTree<E> {
    fn default() -> Self {
        Self {
            edges: FxHashSet::default(),
            total_cost: 0.0,
        }
    }
}

impl<E: Eq + Hash> SpanningTree<E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            total_cost: 0.0,
        }
    }

    /// Returns false if the edge already was part of the tree.
    pub(crate) fn insert(&mut self, edge: E, cost: Cost) -> bool {
        if !self.edges.insert(edge) {
            return false;
        }

        self.total_cost += cost;
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.edges.iter()
    }

    pub fn contains(&self, edge: &E) -> bool {
        self.edges.contains(edge)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }
}
