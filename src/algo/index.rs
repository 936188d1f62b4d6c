//! Dense call-local adjacency index
//!
//! Every analysis call builds its own index: node keys are mapped to dense
//! slots so that distances, visited flags and predecessors live in plain
//! vectors owned by the call. Nothing is ever written back into the graph.

use super::types::Direction;
use crate::graph::{DirectedWeightedGraph, NodeKey};
use std::collections::HashMap;

pub(crate) struct AdjacencyIndex {
    /// Node key of each slot, in graph iteration order
    keys: Vec<NodeKey>,
    slots: HashMap<NodeKey, usize>,
    outgoing: Vec<Vec<(usize, f64)>>,
    incoming: Vec<Vec<(usize, f64)>>,
}

impl AdjacencyIndex {
    pub(crate) fn build<G: DirectedWeightedGraph>(graph: &G) -> Self {
        let keys: Vec<NodeKey> = graph.nodes().map(|n| n.key).collect();
        let slots: HashMap<NodeKey, usize> =
            keys.iter().enumerate().map(|(slot, key)| (*key, slot)).collect();

        let mut outgoing = vec![Vec::new(); keys.len()];
        let mut incoming = vec![Vec::new(); keys.len()];

        for (src, key) in keys.iter().enumerate() {
            for edge in graph.out_edges(*key) {
                // Edges pointing outside the node set break the ADT contract; skip them.
                let Some(&dest) = slots.get(&edge.dest) else {
                    continue;
                };
                outgoing[src].push((dest, edge.weight));
                incoming[dest].push((src, edge.weight));
            }
        }

        Self {
            keys,
            slots,
            outgoing,
            incoming,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn slot(&self, key: NodeKey) -> Option<usize> {
        self.slots.get(&key).copied()
    }

    pub(crate) fn key(&self, slot: usize) -> NodeKey {
        self.keys[slot]
    }

    /// Neighbors of `slot` with the connecting edge weight. `Incoming`
    /// yields the neighbors of the reversed graph.
    pub(crate) fn neighbors(&self, slot: usize, direction: Direction) -> &[(usize, f64)] {
        match direction {
            Direction::Outgoing => &self.outgoing[slot],
            Direction::Incoming => &self.incoming[slot],
        }
    }

    pub(crate) fn degree(&self, slot: usize, direction: Direction) -> usize {
        self.neighbors(slot, direction).len()
    }
}
