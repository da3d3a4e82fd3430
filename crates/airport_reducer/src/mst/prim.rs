use tracing::{debug, instrument};

use super::{
    error::MstError,
    frontier::{Frontier, heap_frontier::HeapFrontier, scan_frontier::ScanFrontier},
    mst_params::{FrontierStrategy, MstParams},
    spanning_tree::SpanningTree,
    weighted_graph::{WeightedGraph, validate_nodes},
};

/// Minimum spanning trees with the algorithm of Jarník / Prim.
///
/// The builder only borrows the graph; every call owns its frontier and
/// result, so one builder can be shared between threads.
pub struct MstBuilder<'a, G: WeightedGraph> {
    graph: &'a G,
    params: MstParams,
}

impl<'a, G: WeightedGraph> MstBuilder<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            params: MstParams::default(),
        }
    }

    pub fn with_params(mut self, params: MstParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &MstParams {
        &self.params
    }

    /// Finds the edges of a minimum spanning tree over the subgraph induced
    /// by `nodes`, growing the tree from the first node.
    ///
    /// Edges leading to nodes that are not listed are ignored. When several
    /// minimum spanning trees exist, which one is returned depends on the
    /// frontier strategy; the total cost does not.
    ///
    /// # Errors
    ///
    /// * [`MstError::EmptyInput`] if `nodes` is empty
    /// * [`MstError::UnknownNode`] / [`MstError::DuplicateNode`] for invalid nodes
    /// * [`MstError::Disconnected`] if some node cannot be reached from the first
    #[instrument(skip_all, level = "debug", fields(nodes = nodes.len(), frontier = %self.params.frontier))]
    pub fn minimal_spanning_tree(
        &self,
        nodes: &[G::Node],
    ) -> Result<SpanningTree<G::Edge>, MstError> {
        validate_nodes(self.graph, nodes)?;

        if nodes.len() == 1 {
            return Ok(SpanningTree::default());
        }

        let tree = match self.params.frontier {
            FrontierStrategy::Scan => self.grow(nodes, ScanFrontier::new(&nodes[1..]))?,
            FrontierStrategy::BinaryHeap => self.grow(nodes, HeapFrontier::new(nodes))?,
        };

        debug!(
            edges = tree.len(),
            total_cost = tree.total_cost(),
            "Spanning tree complete"
        );

        Ok(tree)
    }

    fn grow<F>(
        &self,
        nodes: &[G::Node],
        mut frontier: F,
    ) -> Result<SpanningTree<G::Edge>, MstError>
    where
        F: Frontier<G>,
    {
        let total = nodes.len();
        let mut tree = SpanningTree::with_capacity(total - 1);

        frontier.admit(self.graph, nodes[0]);

        for _ in 1..total {
            let Some((node, edge)) = frontier.closest(self.graph) else {
                return Err(MstError::Disconnected {
                    reached: tree.len() + 1,
                    total,
                });
            };

            tree.insert(edge, self.graph.cost(edge));
            frontier.admit(self.graph, node);
        }

        Ok(tree)
    }
}
