use std::{collections::BinaryHeap, hash::Hash};

use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, instrument};

use crate::network::connection::Cost;

use super::{
    error::MstError,
    spanning_tree::SpanningTree,
    weighted_graph::{WeightedGraph, validate_nodes},
};

struct KruskalEdge<N, E> {
    from: N,
    to: N,
    edge: E,
    weight: Cost,
}

impl<N, E> PartialEq for KruskalEdge<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl<N, E> Eq for KruskalEdge<N, E> {}
impl<N, E> PartialOrd for KruskalEdge<N, E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<N, E> Ord for KruskalEdge<N, E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.weight.total_cmp(&self.weight)
    }
}

// Disjoint set union, by size and with path compression
pub(crate) struct Dsu<N> {
    parent: FxHashMap<N, N>,
    size: FxHashMap<N, usize>,
    num_components: usize,
}

impl<N: Copy + Eq + Hash> Dsu<N> {
    pub(crate) fn new(ids: &[N]) -> Self {
        Dsu {
            parent: ids.iter().map(|&id| (id, id)).collect(),
            size: ids.iter().map(|&id| (id, 1)).collect(),
            num_components: ids.len(),
        }
    }

    pub(crate) fn num_components(&self) -> usize {
        self.num_components
    }

    pub(crate) fn find(&mut self, i: N) -> N {
        let mut root = i;
        while let Some(&parent) = self.parent.get(&root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = i;
        while current != root {
            match self.parent.insert(current, root) {
                Some(next) => current = next,
                None => break,
            }
        }

        root
    }

    /// Returns false if both already belong to the same component.
    pub(crate) fn union(&mut self, i: N, j: N) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);
        if root_i == root_j {
            return false;
        }

        let size_i = self.size.get(&root_i).copied().unwrap_or(1);
        let size_j = self.size.get(&root_j).copied().unwrap_or(1);
        let (child, root) = if size_i < size_j {
            (root_i, root_j)
        } else {
            (root_j, root_i)
        };

        self.parent.insert(child, root);
        self.size.insert(root, size_i + size_j);
        self.num_components -= 1;
        true
    }
}

/// Minimum spanning tree with Kruskal's algorithm over the subgraph induced by
/// `nodes`. Validation and error reporting match
/// [`MstBuilder::minimal_spanning_tree`](super::prim::MstBuilder::minimal_spanning_tree).
#[instrument(skip_all, level = "debug", fields(nodes = nodes.len()))]
pub fn kruskal_spanning_tree<G: WeightedGraph>(
    graph: &G,
    nodes: &[G::Node],
) -> Result<SpanningTree<G::Edge>, MstError> {
    validate_nodes(graph, nodes)?;

    let members = nodes.iter().copied().collect::<FxHashSet<_>>();
    let mut seen = FxHashSet::default();
    let mut edges = BinaryHeap::new();

    for &node in nodes {
        for edge in graph.incident_edges(node) {
            let (from, to) = graph.endpoints(edge);
            if members.contains(&from) && members.contains(&to) && seen.insert(edge) {
                edges.push(KruskalEdge {
                    from,
                    to,
                    edge,
                    weight: graph.cost(edge),
                });
            }
        }
    }

    let mut dsu = Dsu::new(nodes);
    let mut tree = SpanningTree::with_capacity(nodes.len() - 1);

    // Process edges in order of weight
    while let Some(edge) = edges.pop() {
        if dsu.num_components() <= 1 {
            break;
        }

        if dsu.union(edge.from, edge.to) {
            tree.insert(edge.edge, edge.weight);
        }
    }

    if dsu.num_components() > 1 {
        let start = dsu.find(nodes[0]);
        let reached = nodes
            .iter()
            .filter(|&&node| dsu.find(node) == start)
            .count();

        return Err(MstError::Disconnected {
            reached,
            total: nodes.len(),
        });
    }

    debug!(edges = tree.len(), total_cost = tree.total_cost(), "Kruskal complete");

    Ok(tree)
}
