use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashSet;

use crate::network::connection::Cost;

use super::error::MstError;

/// Read-only view of an undirected, edge-weighted graph.
///
/// Nodes and edges are identities: two nodes are the same node only if their
/// handles compare equal, whatever data they carry.
pub trait WeightedGraph {
    type Node: Copy + Eq + Hash + Debug;
    type Edge: Copy + Eq + Hash + Debug;

    fn contains_node(&self, node: Self::Node) -> bool;

    fn incident_edges(&self, node: Self::Node) -> impl Iterator<Item = Self::Edge> + '_;

    fn endpoints(&self, edge: Self::Edge) -> (Self::Node, Self::Node);

    fn cost(&self, edge: Self::Edge) -> Cost;

    /// The endpoint of `edge` that is not `node`.
    fn opposite(&self, edge: Self::Edge, node: Self::Node) -> Self::Node {
        let (first, second) = self.endpoints(edge);
        if first == node { second } else { first }
    }
}

pub(crate) fn validate_nodes<G: WeightedGraph>(
    graph: &G,
    nodes: &[G::Node],
) -> Result<(), MstError> {
    if nodes.is_empty() {
        return Err(MstError::EmptyInput);
    }

    let mut seen = FxHashSet::default();
    for &node in nodes {
        if !graph.contains_node(node) {
            return Err(MstError::UnknownNode(format!("{node:?}")));
        }

        if !seen.insert(node) {
            return Err(MstError::DuplicateNode(format!("{node:?}")));
        }
    }

    Ok(())
}
