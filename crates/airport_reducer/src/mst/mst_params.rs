use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "MstParams")]
pub struct MstParams {
    #[serde(default)]
    pub frontier: FrontierStrategy,
}

/// How the frontier picks the next node to admit to the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FrontierStrategy {
    /// Linear scan over every frontier node, O(V²).
    #[default]
    Scan,
    /// Lazy priority queue of candidate edges, O(E log V).
    BinaryHeap,
}

impl Display for FrontierStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontierStrategy::Scan => write!(f, "Scan"),
            FrontierStrategy::BinaryHeap => write!(f, "BinaryHeap"),
        }
    }
}
