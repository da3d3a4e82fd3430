use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use fxhash::FxHashMap;

use crate::{mst::weighted_graph::WeightedGraph, network::connection::Cost};

use super::Frontier;

struct Candidate<N, E> {
    node: N,
    edge: E,
    cost: Cost,
}

impl<N, E> PartialEq for Candidate<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<N, E> Eq for Candidate<N, E> {}

impl<N, E> PartialOrd for Candidate<N, E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so that the max-heap pops the cheapest candidate first.
impl<N, E> Ord for Candidate<N, E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

/// Priority queue frontier. Candidates pointing to nodes already in the tree
/// are left in the heap and skipped when popped.
pub(crate) struct HeapFrontier<G: WeightedGraph> {
    positions: FxHashMap<G::Node, usize>,
    in_tree: FixedBitSet,
    candidates: BinaryHeap<Candidate<G::Node, G::Edge>>,
}

impl<G: WeightedGraph> HeapFrontier<G> {
    pub(crate) fn new(nodes: &[G::Node]) -> Self {
        Self {
            positions: nodes
                .iter()
                .enumerate()
                .map(|(position, &node)| (node, position))
                .collect(),
            in_tree: FixedBitSet::with_capacity(nodes.len()),
            candidates: BinaryHeap::new(),
        }
    }

    fn is_outside(&self, node: G::Node) -> bool {
        self.positions
            .get(&node)
            .is_some_and(|&position| !self.in_tree.contains(position))
    }
}

impl<G: WeightedGraph> Frontier<G> for HeapFrontier<G> {
    fn admit(&mut self, graph: &G, node: G::Node) {
        if let Some(&position) = self.positions.get(&node) {
            self.in_tree.insert(position);
        }

        for edge in graph.incident_edges(node) {
            let other = graph.opposite(edge, node);

            if self.is_outside(other) {
                self.candidates.push(Candidate {
                    node: other,
                    edge,
                    cost: graph.cost(edge),
                });
            }
        }
    }

    fn closest(&mut self, _graph: &G) -> Option<(G::Node, G::Edge)> {
        while let Some(candidate) = self.candidates.peek() {
            if self.is_outside(candidate.node) {
                return Some((candidate.node, candidate.edge));
            }

            self.candidates.pop();
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{network::airport_network::AirportNetwork, test_utils::create_network};

    #[test]
    fn test_candidates_pop_cheapest_first() {
        let mut heap = BinaryHeap::new();
        for cost in [3.0, -1.0, 2.0] {
            heap.push(Candidate {
                node: 0usize,
                edge: 0usize,
                cost,
            });
        }

        let costs = std::iter::from_fn(|| heap.pop().map(|c| c.cost)).collect::<Vec<_>>();
        assert_eq!(costs, vec![-1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_skips_stale_candidates() {
        // 0-1 (1), 0-2 (5), 1-2 (2)
        let (network, airports, connections) =
            create_network(3, &[(0, 1, 1.0), (0, 2, 5.0), (1, 2, 2.0)]);
        let mut frontier = HeapFrontier::<AirportNetwork>::new(&airports);

        frontier.admit(&network, airports[0]);
        assert_eq!(
            frontier.closest(&network),
            Some((airports[1], connections[0]))
        );

        frontier.admit(&network, airports[1]);
        assert_eq!(
            frontier.closest(&network),
            Some((airports[2], connections[2]))
        );

        frontier.admit(&network, airports[2]);
        // Only the stale 0-2 candidate is left.
        assert_eq!(frontier.closest(&network), None);
    }
}
