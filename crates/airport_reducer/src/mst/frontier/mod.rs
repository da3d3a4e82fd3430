pub(crate) mod heap_frontier;
pub(crate) mod scan_frontier;

use super::weighted_graph::WeightedGraph;

/// Nodes not yet admitted to the growing tree, each with the cheapest known
/// edge linking it to the tree.
pub(crate) trait Frontier<G: WeightedGraph> {
    /// Moves `node` into the tree and relaxes the edges leading from it to
    /// nodes still outside.
    fn admit(&mut self, graph: &G, node: G::Node);

    /// The outside node with the cheapest known edge to the tree, or `None`
    /// when no outside node is reachable anymore.
    fn closest(&mut self, graph: &G) -> Option<(G::Node, G::Edge)>;
}
