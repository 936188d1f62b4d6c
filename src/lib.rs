//! dwgraph: Directed Weighted Graph Analysis Engine
//!
//! Answers global connectivity queries, computes single-source shortest
//! paths, groups mutually reachable nodes, and persists graphs to a JSON
//! snapshot format.
//!
//! # Core Concepts
//!
//! - **Graph ADT**: [`DirectedWeightedGraph`] is the capability interface the
//!   engine consumes; [`DiGraph`] is the adjacency-list implementation.
//! - **Engine**: [`GraphAlgo`] runs analyses over a shared graph handle with
//!   all working state kept local to each call.
//! - **Snapshots**: [`JsonStore`] reads and writes whole-graph JSON records.
//!
//! # Example
//!
//! ```
//! use dwgraph::{DiGraph, DirectedWeightedGraph, GraphAlgo, Node, NodeKey};
//!
//! let mut graph = DiGraph::new();
//! graph.add_node(Node::new(1));
//! graph.add_node(Node::new(2));
//! graph.connect(NodeKey::new(1), NodeKey::new(2), 5.0).unwrap();
//!
//! let algo = GraphAlgo::new(graph);
//! assert_eq!(algo.shortest_path_dist(1, 2), Some(5.0));
//! assert!(!algo.is_connected());
//! ```

pub mod algo;
pub mod config;
mod graph;
pub mod storage;

pub use algo::{structurally_equal, DistancePolicy, GraphAlgo, PathResult, SharedGraph};
pub use config::{ConfigError, EngineConfig, SnapshotConfig};
pub use graph::{
    DiGraph, DirectedWeightedGraph, Edge, GeoLocation, GraphError, GraphResult, Node, NodeKey,
    ParseLocationError,
};
pub use storage::{GraphSnapshot, GraphStore, JsonStore, StorageError, StorageResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
