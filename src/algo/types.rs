//! Shared algorithm types and result structures

use crate::graph::Node;
use serde::{Deserialize, Serialize};

/// Direction for edge traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Follow outgoing edges (src -> dest)
    #[default]
    Outgoing,
    /// Follow incoming edges, i.e. walk the reversed graph
    Incoming,
}

/// How relaxed distances are stored during shortest-path search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistancePolicy {
    /// Every improved distance is truncated to a whole number before it is
    /// stored. Comparisons still use the untruncated candidate, so on
    /// fractional weights the selected path can differ from `Exact`.
    #[default]
    Truncate,
    /// Distances keep full floating-point precision
    Exact,
}

impl DistancePolicy {
    /// Apply the policy to a freshly relaxed distance
    pub fn store(self, distance: f64) -> f64 {
        match self {
            DistancePolicy::Truncate => distance.trunc(),
            DistancePolicy::Exact => distance,
        }
    }
}

/// Result of a shortest-path query
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Whether a path was found
    pub found: bool,
    /// Nodes from source to destination (inclusive); empty when the source
    /// is the destination
    pub path: Vec<Node>,
    /// Total distance under the engine's distance policy
    pub distance: f64,
}

impl PathResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
            distance: 0.0,
        }
    }

    pub fn found(path: Vec<Node>, distance: f64) -> Self {
        Self {
            found: true,
            path,
            distance,
        }
    }

    /// Number of hops along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
