//! Graph building utilities for integration tests

use dwgraph::{DiGraph, DirectedWeightedGraph, GeoLocation, Node, NodeKey};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn key(k: i32) -> NodeKey {
    NodeKey::new(k)
}

/// Keys of a node path, as raw integers
pub fn keys_of(path: &[Node]) -> Vec<i32> {
    path.iter().map(|n| n.key.get()).collect()
}

/// Build a graph from node keys and `(src, dest, weight)` triples
pub fn from_edges(nodes: &[i32], edges: &[(i32, i32, f64)]) -> DiGraph {
    let mut graph = DiGraph::new();
    for &k in nodes {
        graph.add_node(Node::new(k));
    }
    for &(src, dest, weight) in edges {
        graph
            .connect(key(src), key(dest), weight)
            .expect("test edge must be valid");
    }
    graph
}

/// Directed cycle over the given keys, in order, with unit weights
pub fn cycle(keys: &[i32]) -> DiGraph {
    let edges: Vec<(i32, i32, f64)> = keys
        .iter()
        .zip(keys.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b, 1.0))
        .collect();
    from_edges(keys, &edges)
}

/// Configuration for a seeded random graph
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    pub nodes: i32,
    /// Probability of each ordered pair being connected
    pub density: f64,
    pub max_weight: f64,
    pub seed: u64,
    /// Give every node a random location
    pub with_locations: bool,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            nodes: 30,
            density: 0.08,
            max_weight: 10.0,
            seed: 7,
            with_locations: false,
        }
    }
}

pub fn random_graph(config: &RandomGraphConfig) -> DiGraph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut graph = DiGraph::new();

    for k in 0..config.nodes {
        let mut node = Node::new(k);
        if config.with_locations {
            node = node.with_location(GeoLocation::new(
                rng.gen_range(-180.0..180.0),
                rng.gen_range(-90.0..90.0),
                0.0,
            ));
        }
        graph.add_node(node);
    }

    for src in 0..config.nodes {
        for dest in 0..config.nodes {
            if src != dest && rng.gen_bool(config.density) {
                let weight = rng.gen_range(0.0..config.max_weight);
                graph
                    .connect(key(src), key(dest), weight)
                    .expect("random edge must be valid");
            }
        }
    }

    graph
}
