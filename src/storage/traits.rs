//! Storage trait definitions

use crate::graph::{DirectedWeightedGraph, GraphError, NodeKey};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while saving or loading a snapshot
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate node id: {0}")]
    DuplicateNode(NodeKey),

    #[error("Invalid edge: {0}")]
    Graph(#[from] GraphError),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for whole-graph snapshot backends
///
/// `load` always builds a brand-new graph; it never touches an existing one.
pub trait GraphStore {
    /// Write the full graph to `path`, replacing any existing file
    fn save<G: DirectedWeightedGraph>(&self, graph: &G, path: &Path) -> StorageResult<()>;

    /// Read a full graph from `path`
    fn load<G: DirectedWeightedGraph>(&self, path: &Path) -> StorageResult<G>;
}
