//! Common test utilities for dwgraph integration tests
//!
//! Builders for small hand-shaped graphs and seeded random graphs.

#![allow(dead_code)]

pub mod graph_builder;

pub use graph_builder::{cycle, from_edges, key, keys_of, random_graph, RandomGraphConfig};
