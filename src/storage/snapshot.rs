//! Snapshot record shape
//!
//! ```text
//! {"Edges":[{"src":0,"dest":1,"w":1.5}, ...],
//!  "Nodes":[{"pos":"1.0,2.0,0.0","id":0}, ...]}
//! ```
//!
//! `pos` is the location flattened to bare comma-separated coordinates.

use super::traits::{StorageError, StorageResult};
use crate::graph::{DirectedWeightedGraph, GeoLocation, Node, NodeKey};
use serde::{Deserialize, Serialize};

/// One edge of a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: NodeKey,
    pub dest: NodeKey,
    pub w: f64,
}

/// One node of a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Absent for nodes without a location
    #[serde(default, with = "flat_pos", skip_serializing_if = "Option::is_none")]
    pub pos: Option<GeoLocation>,
    pub id: NodeKey,
}

/// Whole-graph snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(rename = "Edges")]
    pub edges: Vec<EdgeRecord>,
    #[serde(rename = "Nodes")]
    pub nodes: Vec<NodeRecord>,
}

impl GraphSnapshot {
    /// Capture every node and edge in the graph's iteration order
    pub fn capture<G: DirectedWeightedGraph>(graph: &G) -> Self {
        let nodes = graph
            .nodes()
            .map(|n| NodeRecord {
                pos: n.location,
                id: n.key,
            })
            .collect();

        let edges = graph
            .nodes()
            .flat_map(|n| graph.out_edges(n.key))
            .map(|e| EdgeRecord {
                src: e.src,
                dest: e.dest,
                w: e.weight,
            })
            .collect();

        Self { edges, nodes }
    }

    /// Build a fresh graph: all nodes first, then every edge
    pub fn restore<G: DirectedWeightedGraph>(&self) -> StorageResult<G> {
        let mut graph = G::default();

        for record in &self.nodes {
            let mut node = Node::new(record.id);
            node.location = record.pos;
            if !graph.add_node(node) {
                return Err(StorageError::DuplicateNode(record.id));
            }
        }
        for record in &self.edges {
            graph.connect(record.src, record.dest, record.w)?;
        }

        Ok(graph)
    }
}

/// Serde bridge between `Option<GeoLocation>` and the flattened `x,y,z` string
mod flat_pos {
    use crate::graph::GeoLocation;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(pos: &Option<GeoLocation>, s: S) -> Result<S::Ok, S::Error> {
        match pos {
            Some(p) => s.serialize_str(&p.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<GeoLocation>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        raw.map(|s| s.parse().map_err(D::Error::custom)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;
    use serde_json::json;

    fn sample() -> DiGraph {
        let mut g = DiGraph::new();
        g.add_node(Node::new(0).with_location(GeoLocation::new(35.5, 32.25, 0.0)));
        g.add_node(Node::new(1).with_location(GeoLocation::new(1.0, 2.0, 3.0)));
        g.connect(NodeKey::new(0), NodeKey::new(1), 1.5).unwrap();
        g.connect(NodeKey::new(1), NodeKey::new(0), 2.0).unwrap();
        g
    }

    #[test]
    fn test_capture_matches_record_shape() {
        let snapshot = GraphSnapshot::capture(&sample());
        let text = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"Edges":[{"src":0,"dest":1,"w":1.5},{"src":1,"dest":0,"w":2.0}],"#,
                r#""Nodes":[{"pos":"35.5,32.25,0.0","id":0},{"pos":"1.0,2.0,3.0","id":1}]}"#
            )
        );
    }

    #[test]
    fn test_restore_builds_equal_graph() {
        let original = sample();
        let restored: DiGraph = GraphSnapshot::capture(&original).restore().unwrap();
        assert_eq!(restored.canonical(), original.canonical());
    }

    #[test]
    fn test_node_without_location_omits_pos() {
        let mut g = DiGraph::new();
        g.add_node(Node::new(4));
        let value = serde_json::to_value(GraphSnapshot::capture(&g)).unwrap();
        assert_eq!(value, json!({ "Edges": [], "Nodes": [{ "id": 4 }] }));

        let back: GraphSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back.nodes[0].pos, None);
    }

    #[test]
    fn test_bad_pos_is_rejected() {
        let value = json!({ "Edges": [], "Nodes": [{ "pos": "1.0,2.0", "id": 0 }] });
        assert!(serde_json::from_value::<GraphSnapshot>(value).is_err());
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let value = json!({ "Nodes": [] });
        assert!(serde_json::from_value::<GraphSnapshot>(value).is_err());
    }

    #[test]
    fn test_restore_rejects_duplicate_ids() {
        let snapshot: GraphSnapshot = serde_json::from_value(json!({
            "Edges": [],
            "Nodes": [{ "id": 1 }, { "id": 1 }]
        }))
        .unwrap();
        let result: StorageResult<DiGraph> = snapshot.restore();
        assert!(matches!(result, Err(StorageError::DuplicateNode(k)) if k == NodeKey::new(1)));
    }

    #[test]
    fn test_restore_rejects_dangling_edge() {
        let snapshot: GraphSnapshot = serde_json::from_value(json!({
            "Edges": [{ "src": 0, "dest": 9, "w": 1.0 }],
            "Nodes": [{ "id": 0 }]
        }))
        .unwrap();
        let result: StorageResult<DiGraph> = snapshot.restore();
        assert!(matches!(result, Err(StorageError::Graph(_))));
    }
}
