//! DiGraph: adjacency-list implementation of the graph ADT

use super::edge::Edge;
use super::node::{Node, NodeKey};
use super::traits::{DirectedWeightedGraph, GraphError, GraphResult};
use std::collections::{BTreeMap, BTreeSet};

/// Adjacency-list backed directed weighted graph
///
/// Nodes and edges are kept in ordered maps, so iteration follows ascending
/// key order and is stable across runs.
#[derive(Debug, Default)]
pub struct DiGraph {
    nodes: BTreeMap<NodeKey, Node>,
    /// Outgoing edges keyed by source, then destination
    outgoing: BTreeMap<NodeKey, BTreeMap<NodeKey, Edge>>,
    /// Sources of the edges entering each node
    incoming: BTreeMap<NodeKey, BTreeSet<NodeKey>>,
    edge_count: usize,
    modifications: usize,
}

impl DiGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges entering `key`
    pub fn in_degree(&self, key: NodeKey) -> usize {
        self.incoming.get(&key).map_or(0, BTreeSet::len)
    }

    /// Number of edges leaving `key`
    pub fn out_degree(&self, key: NodeKey) -> usize {
        self.outgoing.get(&key).map_or(0, BTreeMap::len)
    }
}

impl DirectedWeightedGraph for DiGraph {
    fn add_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.key) {
            return false;
        }
        self.nodes.insert(node.key, node);
        self.modifications += 1;
        true
    }

    fn connect(&mut self, src: NodeKey, dest: NodeKey, weight: f64) -> GraphResult<()> {
        if !self.nodes.contains_key(&src) {
            return Err(GraphError::UnknownNode(src));
        }
        if !self.nodes.contains_key(&dest) {
            return Err(GraphError::UnknownNode(dest));
        }
        if src == dest {
            return Err(GraphError::SelfLoop(src));
        }
        if !Edge::is_valid_weight(weight) {
            return Err(GraphError::InvalidWeight { src, dest, weight });
        }

        let previous = self
            .outgoing
            .entry(src)
            .or_default()
            .insert(dest, Edge::new(src, dest, weight));
        if previous.is_none() {
            self.incoming.entry(dest).or_default().insert(src);
            self.edge_count += 1;
        }
        self.modifications += 1;
        Ok(())
    }

    fn remove_node(&mut self, key: NodeKey) -> Option<Node> {
        let node = self.nodes.remove(&key)?;

        if let Some(out) = self.outgoing.remove(&key) {
            for dest in out.keys() {
                if let Some(sources) = self.incoming.get_mut(dest) {
                    sources.remove(&key);
                }
            }
            self.edge_count -= out.len();
        }
        if let Some(sources) = self.incoming.remove(&key) {
            for src in &sources {
                if let Some(out) = self.outgoing.get_mut(src) {
                    out.remove(&key);
                }
            }
            self.edge_count -= sources.len();
        }

        self.modifications += 1;
        Some(node)
    }

    fn remove_edge(&mut self, src: NodeKey, dest: NodeKey) -> Option<Edge> {
        let edge = self.outgoing.get_mut(&src)?.remove(&dest)?;
        if let Some(sources) = self.incoming.get_mut(&dest) {
            sources.remove(&src);
        }
        self.edge_count -= 1;
        self.modifications += 1;
        Some(edge)
    }

    fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(&key)
    }

    fn edge(&self, src: NodeKey, dest: NodeKey) -> Option<&Edge> {
        self.outgoing.get(&src)?.get(&dest)
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    fn out_edges(&self, key: NodeKey) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing.get(&key).into_iter().flat_map(|out| out.values())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn modification_count(&self) -> usize {
        self.modifications
    }
}

impl std::fmt::Display for DiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}
