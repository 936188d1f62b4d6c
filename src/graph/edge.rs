//! Directed weighted edge

use super::node::NodeKey;
use serde::{Deserialize, Serialize};

/// A directed edge with a non-negative weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node
    pub src: NodeKey,
    /// Destination node
    pub dest: NodeKey,
    /// Traversal cost
    pub weight: f64,
}

impl Edge {
    /// Create a new edge
    pub fn new(src: impl Into<NodeKey>, dest: impl Into<NodeKey>, weight: f64) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
            weight,
        }
    }

    /// Check whether a weight is usable: finite and non-negative
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}:{:?}", self.src, self.dest, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_validation() {
        assert!(Edge::is_valid_weight(0.0));
        assert!(Edge::is_valid_weight(3.25));
        assert!(!Edge::is_valid_weight(-0.5));
        assert!(!Edge::is_valid_weight(f64::NAN));
        assert!(!Edge::is_valid_weight(f64::INFINITY));
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Edge::new(3, 4, 2.0).to_string(), "3->4:2.0");
    }
}
