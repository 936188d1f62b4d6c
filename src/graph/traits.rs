//! Graph ADT consumed by the analysis engine

use super::edge::Edge;
use super::node::{Node, NodeKey};
use thiserror::Error;

/// Errors raised by graph mutations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("Node not found: {0}")]
    UnknownNode(NodeKey),

    #[error("Self-loop on node {0} is not allowed")]
    SelfLoop(NodeKey),

    #[error("Invalid weight {weight} on edge {src}->{dest}")]
    InvalidWeight {
        src: NodeKey,
        dest: NodeKey,
        weight: f64,
    },
}

/// Result type for graph mutations
pub type GraphResult<T> = Result<T, GraphError>;

/// Capability interface of a directed weighted graph
///
/// The engine only reads and builds graphs through these operations, so any
/// storage layout can back it. `Default` must produce an empty graph; the
/// engine relies on it to build copies and loaded snapshots.
pub trait DirectedWeightedGraph: Default {
    /// Add a node. Returns false and leaves the graph untouched if the key
    /// is already present.
    fn add_node(&mut self, node: Node) -> bool;

    /// Connect `src -> dest`. An existing edge between the same ordered
    /// pair has its weight replaced.
    fn connect(&mut self, src: NodeKey, dest: NodeKey, weight: f64) -> GraphResult<()>;

    /// Remove a node together with every edge touching it
    fn remove_node(&mut self, key: NodeKey) -> Option<Node>;

    /// Remove the edge `src -> dest`
    fn remove_edge(&mut self, src: NodeKey, dest: NodeKey) -> Option<Edge>;

    fn node(&self, key: NodeKey) -> Option<&Node>;

    fn edge(&self, src: NodeKey, dest: NodeKey) -> Option<&Edge>;

    /// All nodes, in the graph's iteration order
    fn nodes(&self) -> impl Iterator<Item = &Node> + '_;

    /// Outgoing edges of `key`; empty for an unknown key
    fn out_edges(&self, key: NodeKey) -> impl Iterator<Item = &Edge> + '_;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Number of successful mutations since creation
    fn modification_count(&self) -> usize;

    fn contains(&self, key: NodeKey) -> bool {
        self.node(key).is_some()
    }

    /// Deterministic text form: nodes sorted by key, then edges sorted by
    /// `(src, dest)`. Two graphs with equal canonical forms hold the same
    /// nodes, locations, edges and weights.
    fn canonical(&self) -> String {
        let mut nodes: Vec<&Node> = self.nodes().collect();
        nodes.sort_by_key(|n| n.key);

        let mut edges: Vec<&Edge> = nodes.iter().flat_map(|n| self.out_edges(n.key)).collect();
        edges.sort_by_key(|e| (e.src, e.dest));

        let nodes: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
        let edges: Vec<String> = edges.iter().map(|e| e.to_string()).collect();
        format!("Nodes: [{}] Edges: [{}]", nodes.join(", "), edges.join(", "))
    }
}
