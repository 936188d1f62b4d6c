//! GraphAlgo: analysis engine bound to one graph

use super::components::{reachability_groups, strong_groups};
use super::dijkstra::shortest_route;
use super::index::AdjacencyIndex;
use super::reach::is_strongly_connected;
use super::types::PathResult;
use crate::config::EngineConfig;
use crate::graph::{DiGraph, DirectedWeightedGraph, Node, NodeKey};
use crate::storage::{GraphStore, StorageResult};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use tracing::{debug, warn};

/// Graph handle shared between an engine and its callers
pub type SharedGraph<G> = Arc<RwLock<G>>;

/// Analysis engine over a shared graph
///
/// Every analysis call holds a read guard for its whole duration and keeps
/// its working state in call-local buffers, so concurrent calls on the same
/// engine never interfere and the graph is never annotated. Callers that
/// mutate the graph take the write guard, which excludes running analyses.
pub struct GraphAlgo<G: DirectedWeightedGraph = DiGraph> {
    graph: SharedGraph<G>,
    config: EngineConfig,
}

impl<G: DirectedWeightedGraph> Default for GraphAlgo<G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}

impl<G: DirectedWeightedGraph> GraphAlgo<G> {
    /// Create an engine owning a fresh handle to `graph`
    pub fn new(graph: G) -> Self {
        Self::with_shared(Arc::new(RwLock::new(graph)))
    }

    /// Create an engine over a caller's graph handle
    pub fn with_shared(graph: SharedGraph<G>) -> Self {
        Self {
            graph,
            config: EngineConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Point the engine at another graph. The previous handle is only
    /// released, never cleared.
    pub fn init(&mut self, graph: SharedGraph<G>) {
        self.graph = graph;
    }

    /// The graph this engine currently works on
    pub fn graph(&self) -> SharedGraph<G> {
        Arc::clone(&self.graph)
    }

    /// Analysis only reads, so a guard poisoned by a panicking writer is
    /// still usable.
    fn read(&self) -> RwLockReadGuard<'_, G> {
        self.graph.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Deep copy built through the graph ADT: all nodes, then all edges
    pub fn copy(&self) -> G {
        let source = self.read();
        let mut copy = G::default();

        for node in source.nodes() {
            copy.add_node(node.clone());
        }
        for node in source.nodes() {
            for edge in source.out_edges(node.key) {
                if let Err(err) = copy.connect(edge.src, edge.dest, edge.weight) {
                    warn!(error = %err, "skipping edge while copying graph");
                }
            }
        }

        copy
    }

    /// Whether every node has a directed path to every other node.
    /// Graphs with zero or one node are connected.
    pub fn is_connected(&self) -> bool {
        let graph = self.read();
        if graph.node_count() <= 1 {
            return true;
        }
        is_strongly_connected(&AdjacencyIndex::build(&*graph))
    }

    /// Length of the shortest path, or `None` when there is no path.
    ///
    /// `None` also covers unknown keys and graphs with at most one node;
    /// the two cases cannot be told apart from the return value.
    pub fn shortest_path_dist(&self, src: impl Into<NodeKey>, dest: impl Into<NodeKey>) -> Option<f64> {
        let result = self.route(src, dest);
        result.found.then_some(result.distance)
    }

    /// Nodes along the shortest path, source and destination included.
    ///
    /// A path from a node to itself is empty. `None` under the same
    /// conditions as [`GraphAlgo::shortest_path_dist`].
    pub fn shortest_path(&self, src: impl Into<NodeKey>, dest: impl Into<NodeKey>) -> Option<Vec<Node>> {
        let result = self.route(src, dest);
        result.found.then_some(result.path)
    }

    /// Shortest path with both its node sequence and distance
    pub fn route(&self, src: impl Into<NodeKey>, dest: impl Into<NodeKey>) -> PathResult {
        let (src, dest) = (src.into(), dest.into());
        let graph = self.read();

        if graph.node_count() <= 1 || !graph.contains(src) || !graph.contains(dest) {
            return PathResult::not_found();
        }
        if src == dest {
            return PathResult::found(Vec::new(), 0.0);
        }

        let index = AdjacencyIndex::build(&*graph);
        let (Some(source), Some(target)) = (index.slot(src), index.slot(dest)) else {
            return PathResult::not_found();
        };

        let Some(route) = shortest_route(&index, source, target, self.config.distance) else {
            debug!(%src, %dest, "no path");
            return PathResult::not_found();
        };

        let path: Vec<Node> = route
            .slots
            .iter()
            .filter_map(|&slot| graph.node(index.key(slot)).cloned())
            .collect();
        debug!(%src, %dest, hops = path.len() - 1, distance = route.distance, "shortest path");
        PathResult::found(path, route.distance)
    }

    /// Group nodes by intersecting each start node's forward and backward
    /// reachability.
    ///
    /// Nodes without outgoing or without incoming edges produce an empty
    /// group rather than a singleton, so the groups do not necessarily
    /// cover every node. See [`GraphAlgo::strong_components`] for a strict
    /// partition.
    pub fn components(&self) -> Vec<Vec<NodeKey>> {
        let graph = self.read();
        let index = AdjacencyIndex::build(&*graph);
        let groups = resolve_groups(&index, reachability_groups(&index));
        debug!(nodes = index.len(), groups = groups.len(), "grouped by reachability");
        groups
    }

    /// Strongly connected components. Every node belongs to exactly one
    /// group; groups are ordered by their first node.
    pub fn strong_components(&self) -> Vec<Vec<NodeKey>> {
        let graph = self.read();
        let index = AdjacencyIndex::build(&*graph);
        let groups = resolve_groups(&index, strong_groups(&index));
        debug!(nodes = index.len(), groups = groups.len(), "strongly connected components");
        groups
    }

    /// Write the current graph as a snapshot
    pub fn try_save(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        let graph = self.read();
        self.config.store().save(&*graph, path.as_ref())
    }

    /// Write the current graph as a snapshot, logging any failure
    pub fn save(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_save(path) {
            Ok(()) => true,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to save graph");
                false
            }
        }
    }

    /// Replace the current graph with one read from a snapshot.
    ///
    /// The engine switches to a new handle only after the whole file has
    /// been parsed and built; on error the current graph stays in place.
    pub fn try_load(&mut self, path: impl AsRef<Path>) -> StorageResult<()> {
        let graph: G = self.config.store().load(path.as_ref())?;
        self.graph = Arc::new(RwLock::new(graph));
        Ok(())
    }

    /// Replace the current graph from a snapshot, logging any failure
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_load(path) {
            Ok(()) => true,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load graph");
                false
            }
        }
    }
}

fn resolve_groups(index: &AdjacencyIndex, groups: Vec<Vec<usize>>) -> Vec<Vec<NodeKey>> {
    groups
        .into_iter()
        .map(|group| group.into_iter().map(|slot| index.key(slot)).collect())
        .collect()
}

/// Same node count, same edge count and same canonical form
pub fn structurally_equal<A, B>(a: &A, b: &B) -> bool
where
    A: DirectedWeightedGraph,
    B: DirectedWeightedGraph,
{
    a.node_count() == b.node_count()
        && a.edge_count() == b.edge_count()
        && a.canonical() == b.canonical()
}

impl<G: DirectedWeightedGraph> PartialEq for GraphAlgo<G> {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.graph, &other.graph) {
            return true;
        }
        // One guard at a time: a reader blocked behind a queued writer must
        // not be holding the other graph.
        let (nodes, edges, canonical) = {
            let mine = self.read();
            (mine.node_count(), mine.edge_count(), mine.canonical())
        };
        let theirs = other.read();
        nodes == theirs.node_count()
            && edges == theirs.edge_count()
            && canonical == theirs.canonical()
    }
}
