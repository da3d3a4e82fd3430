use fxhash::FxHashMap;

use crate::mst::weighted_graph::WeightedGraph;

use super::Frontier;

/// Map based frontier. A node is outside the tree exactly as long as it is a
/// key of `closest`; the value is `None` until an edge to the tree is known.
pub(crate) struct ScanFrontier<G: WeightedGraph> {
    closest: FxHashMap<G::Node, Option<G::Edge>>,
}

impl<G: WeightedGraph> ScanFrontier<G> {
    pub(crate) fn new(outside: &[G::Node]) -> Self {
        Self {
            closest: outside.iter().map(|&node| (node, None)).collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, node: G::Node) -> bool {
        self.closest.contains_key(&node)
    }

    #[cfg(test)]
    pub(crate) fn closest_edge(&self, node: G::Node) -> Option<G::Edge> {
        self.closest.get(&node).copied().flatten()
    }
}

impl<G: WeightedGraph> Frontier<G> for ScanFrontier<G> {
    fn admit(&mut self, graph: &G, node: G::Node) {
        self.closest.remove(&node);

        for edge in graph.incident_edges(node) {
            let other = graph.opposite(edge, node);

            if let Some(current) = self.closest.get_mut(&other) {
                let is_cheaper = match current {
                    None => true,
                    Some(current_edge) => graph.cost(edge) < graph.cost(*current_edge),
                };

                if is_cheaper {
                    *current = Some(edge);
                }
            }
        }
    }

    fn closest(&mut self, graph: &G) -> Option<(G::Node, G::Edge)> {
        let mut best: Option<(G::Node, G::Edge)> = None;

        for (&node, &edge) in &self.closest {
            let Some(edge) = edge else {
                continue;
            };

            // Ties keep the first node encountered.
            match best {
                Some((_, best_edge)) if graph.cost(edge) >= graph.cost(best_edge) => {}
                _ => best = Some((node, edge)),
            }
        }

        best
    }
}
