//! Analysis algorithms over directed weighted graphs
//!
//! Provides connectivity checks, shortest paths, node grouping by mutual
//! reachability, and snapshot persistence through [`GraphAlgo`].

mod components;
mod dijkstra;
mod engine;
mod index;
mod reach;
mod types;

pub use engine::{structurally_equal, GraphAlgo, SharedGraph};
pub use types::{DistancePolicy, PathResult};
