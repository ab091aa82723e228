//! Core data types for the network tool.
//!
//! This module defines the host-side data the export dialog serializes:
//! the network document shown on the canvas and the component descriptor
//! for the current selection. The dialog treats both as payload candidates
//! and never constructs them itself.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for network nodes.
pub type NodeId = Uuid;

/// A single node in a network document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Unique identifier for this node
    pub id: NodeId,
    /// User-displayable label of the node
    pub label: String,
    /// Position on the canvas as (x, y) coordinates
    pub position: (f32, f32),
}

impl NetworkNode {
    /// Creates a new node with a unique ID at the given position.
    pub fn new(label: String, position: (f32, f32)) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            position,
        }
    }
}

/// A directional edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// ID of the source node
    pub from: NodeId,
    /// ID of the destination node
    pub to: NodeId,
}

impl Edge {
    /// Creates a new edge between two nodes.
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// The full network document: everything currently on the canvas.
///
/// Exported verbatim by the dialog's network mode; the dialog only ever
/// reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkDocument {
    /// Map of all nodes in the network, indexed by their ID
    pub nodes: HashMap<NodeId, NetworkNode>,
    /// List of all edges between nodes
    pub edges: Vec<Edge>,
}

impl NetworkDocument {
    /// Creates a new empty network document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the network.
    ///
    /// # Returns
    ///
    /// The ID of the newly added node.
    pub fn add_node(&mut self, node: NetworkNode) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Adds an edge between two existing nodes.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the edge was added, or an error message if either
    /// endpoint doesn't exist.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), String> {
        if !self.nodes.contains_key(&from) {
            return Err("Source node does not exist".to_string());
        }
        if !self.nodes.contains_key(&to) {
            return Err("Destination node does not exist".to_string());
        }

        self.edges.push(Edge::new(from, to));
        Ok(())
    }

    /// Removes a node and all its edges from the network.
    ///
    /// # Returns
    ///
    /// `true` if the node was found and removed, `false` otherwise.
    pub fn remove_node(&mut self, node_id: &NodeId) -> bool {
        let removed = self.nodes.remove(node_id).is_some();
        if removed {
            self.edges
                .retain(|edge| edge.from != *node_id && edge.to != *node_id);
        }
        removed
    }
}

/// A reusable template component: a named, colored subnetwork the user can
/// export and drop into other documents.
///
/// The descriptor is owned by the host; while the export dialog is open in
/// template mode it writes the user's name/color edits back into this record
/// through its commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Unique identifier for this component
    pub id: Uuid,
    /// Display name of the component; template exports require it non-blank
    pub label: String,
    /// Index into the component color palette
    pub color: usize,
    /// The component's member nodes
    pub nodes: Vec<NetworkNode>,
    /// Edges between the member nodes
    pub edges: Vec<Edge>,
}

impl ComponentDescriptor {
    /// Creates a new empty component with the given label and color index.
    pub fn new(label: String, color: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            color,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = NetworkNode::new("Gateway".to_string(), (100.0, 200.0));

        assert_eq!(node.label, "Gateway");
        assert_eq!(node.position, (100.0, 200.0));
        assert!(!node.id.is_nil());
    }

    #[test]
    fn test_add_edge_requires_both_endpoints() {
        let mut network = NetworkDocument::new();
        let a = network.add_node(NetworkNode::new("A".to_string(), (0.0, 0.0)));
        let missing = Uuid::new_v4();

        assert!(network.add_edge(a, missing).is_err());
        assert!(network.add_edge(missing, a).is_err());
        assert!(network.edges.is_empty());
    }

    #[test]
    fn test_remove_node_prunes_edges() {
        let mut network = NetworkDocument::new();
        let a = network.add_node(NetworkNode::new("A".to_string(), (0.0, 0.0)));
        let b = network.add_node(NetworkNode::new("B".to_string(), (100.0, 0.0)));
        let c = network.add_node(NetworkNode::new("C".to_string(), (200.0, 0.0)));

        network.add_edge(a, b).unwrap();
        network.add_edge(b, c).unwrap();
        network.add_edge(a, c).unwrap();

        assert!(network.remove_node(&b));

        assert_eq!(network.edges.len(), 1);
        assert_eq!(network.edges[0], Edge::new(a, c));
    }

    #[test]
    fn test_network_roundtrip_serialization() {
        let mut original = NetworkDocument::new();
        let a = original.add_node(NetworkNode::new("A".to_string(), (50.0, 100.0)));
        let b = original.add_node(NetworkNode::new("B".to_string(), (150.0, 100.0)));
        original.add_edge(a, b).unwrap();

        let json = serde_json::to_string(&original).unwrap();
        let restored: NetworkDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.nodes.len(), 2);
        assert_eq!(restored.nodes[&a].label, "A");
        assert_eq!(restored.edges, vec![Edge::new(a, b)]);
    }

    #[test]
    fn test_component_serialization_carries_members() {
        let mut component = ComponentDescriptor::new("Edge Pair".to_string(), 3);
        let node = NetworkNode::new("Relay".to_string(), (10.0, 20.0));
        let node_id = node.id;
        component.nodes.push(node);
        component
            .edges
            .push(Edge::new(node_id, node_id));

        let json = serde_json::to_string(&component).unwrap();
        assert!(json.contains("Edge Pair"));
        assert!(json.contains("Relay"));

        let restored: ComponentDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.color, 3);
        assert_eq!(restored.nodes.len(), 1);
        assert_eq!(restored.edges.len(), 1);
    }
}
