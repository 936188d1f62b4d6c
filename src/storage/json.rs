//! JSON file backend for graph snapshots

use super::snapshot::GraphSnapshot;
use super::traits::{GraphStore, StorageResult};
use crate::graph::DirectedWeightedGraph;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores one graph per JSON file
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStore {
    /// Write indented JSON instead of a single line
    pub pretty: bool,
}

impl JsonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Render a graph as snapshot text without touching the filesystem
    pub fn render<G: DirectedWeightedGraph>(&self, graph: &G) -> StorageResult<String> {
        let snapshot = GraphSnapshot::capture(graph);
        let text = if self.pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        Ok(text)
    }

    /// Parse snapshot text into a fresh graph
    pub fn parse<G: DirectedWeightedGraph>(&self, text: &str) -> StorageResult<G> {
        let snapshot: GraphSnapshot = serde_json::from_str(text)?;
        snapshot.restore()
    }
}

impl GraphStore for JsonStore {
    fn save<G: DirectedWeightedGraph>(&self, graph: &G, path: &Path) -> StorageResult<()> {
        let text = self.render(graph)?;
        let staging = staging_path(path);
        std::fs::write(&staging, text)?;
        if let Err(err) = std::fs::rename(&staging, path) {
            let _ = std::fs::remove_file(&staging);
            return Err(err.into());
        }
        debug!(
            path = %path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "saved snapshot"
        );
        Ok(())
    }

    fn load<G: DirectedWeightedGraph>(&self, path: &Path) -> StorageResult<G> {
        let text = std::fs::read_to_string(path)?;
        let graph: G = self.parse(&text)?;
        debug!(
            path = %path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded snapshot"
        );
        Ok(graph)
    }
}

/// Sibling file the snapshot is written to before it replaces `path`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
