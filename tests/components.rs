//! Grouping nodes by mutual reachability

mod common;

use common::{cycle, from_edges, key, random_graph, RandomGraphConfig};
use dwgraph::{DiGraph, DirectedWeightedGraph, GraphAlgo, Node, NodeKey};
use std::collections::HashSet;

fn two_disjoint_cycles() -> DiGraph {
    from_edges(
        &[1, 2, 3, 10, 11],
        &[(1, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0), (10, 11, 2.0), (11, 10, 2.0)],
    )
}

#[test]
fn disjoint_cycles_form_two_groups() {
    let groups = GraphAlgo::new(two_disjoint_cycles()).components();
    assert_eq!(groups, vec![vec![key(1), key(2), key(3)], vec![key(10), key(11)]]);

    let mut seen = HashSet::new();
    for group in &groups {
        for k in group {
            assert!(seen.insert(*k), "node {k} appears twice");
        }
    }
    assert_eq!(seen.len(), 5);
}

#[test]
fn isolated_node_yields_empty_group() {
    let mut graph = cycle(&[1, 2]);
    graph.add_node(Node::new(3));
    let groups = GraphAlgo::new(graph).components();
    assert_eq!(groups, vec![vec![key(1), key(2)], Vec::<NodeKey>::new()]);
}

#[test]
fn every_edgeless_node_yields_its_own_empty_group() {
    let graph = from_edges(&[1, 2, 3], &[]);
    let groups = GraphAlgo::new(graph).components();
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(Vec::is_empty));
}

#[test]
fn empty_graph_has_no_groups() {
    let algo = GraphAlgo::new(DiGraph::new());
    assert!(algo.components().is_empty());
    assert!(algo.strong_components().is_empty());
}

#[test]
fn strong_components_partition_every_node() {
    let mut graph = two_disjoint_cycles();
    graph.add_node(Node::new(20));
    graph.connect(key(3), key(20), 1.0).unwrap();

    let groups = GraphAlgo::new(graph).strong_components();
    assert_eq!(
        groups,
        vec![vec![key(1), key(2), key(3)], vec![key(10), key(11)], vec![key(20)]]
    );
}

#[test]
fn components_are_recomputed_per_call() {
    let algo = GraphAlgo::new(two_disjoint_cycles());
    let first = algo.components();
    let second = algo.components();
    assert_eq!(first, second);

    let other = GraphAlgo::new(cycle(&[1, 2, 3]));
    assert_eq!(other.components(), vec![vec![key(1), key(2), key(3)]]);
    assert_eq!(algo.components(), first);
}

#[test]
fn reachability_groups_match_strong_components_on_random_graphs() {
    for seed in 0..30 {
        let graph = random_graph(&RandomGraphConfig {
            nodes: 25,
            density: 0.07,
            seed,
            ..Default::default()
        });

        let dead_ends: HashSet<NodeKey> = graph
            .nodes()
            .map(|n| n.key)
            .filter(|&k| graph.in_degree(k) == 0 || graph.out_degree(k) == 0)
            .collect();

        let algo = GraphAlgo::new(graph);
        let groups = algo.components();
        let strong = algo.strong_components();

        let empty = groups.iter().filter(|g| g.is_empty()).count();
        assert_eq!(empty, dead_ends.len(), "seed {seed}");

        let non_empty: Vec<Vec<NodeKey>> = groups.into_iter().filter(|g| !g.is_empty()).collect();
        let expected: Vec<Vec<NodeKey>> = strong
            .into_iter()
            .filter(|g| !g.iter().any(|k| dead_ends.contains(k)))
            .collect();
        assert_eq!(non_empty, expected, "seed {seed}");
    }
}
