//! Serializable graph snapshots: a flat `{ nodes, edges }` shape that callers
//! can persist or hand to other tools.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNode<N> {
    pub key: String,
    pub attributes: N,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedEdge<E> {
    pub key: String,
    pub source: String,
    pub target: String,
    pub attributes: E,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphExport<N, E> {
    pub nodes: Vec<ExportedNode<N>>,
    pub edges: Vec<ExportedEdge<E>>,
}
