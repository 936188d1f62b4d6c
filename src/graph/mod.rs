//! Core graph data structures

mod digraph;
mod edge;
mod node;
mod traits;


pub use digraph::DiGraph;
pub use edge::Edge;
pub use node::{GeoLocation, Node, NodeKey, ParseLocationError};
pub use traits::{DirectedWeightedGraph, GraphError, GraphResult};
