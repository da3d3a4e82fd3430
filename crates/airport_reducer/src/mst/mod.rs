pub mod error;
pub(crate) mod frontier;
pub mod kruskal;
pub mod mst_params;
pub mod prim;
pub mod spanning_tree;
pub mod weighted_graph;
