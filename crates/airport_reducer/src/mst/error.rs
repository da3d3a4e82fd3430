use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MstError {
    #[error("Cannot build a spanning tree without any node")]
    EmptyInput,

    #[error("Node {0} is not part of the graph")]
    UnknownNode(String),

    #[error("Node {0} is listed more than once")]
    DuplicateNode(String),

    #[error("Graph is disconnected: only {reached} of {total} nodes are reachable from the start")]
    Disconnected { reached: usize, total: usize },
}
