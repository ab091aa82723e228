//! Built-in demo data for the host shell.
//!
//! A small network plus a selected component drawn from it, so the export
//! dialog has realistic payload candidates out of the box.

use crate::types::{ComponentDescriptor, Edge, NetworkDocument, NetworkNode};

/// Builds the demo network together with a selected component.
///
/// The component covers the two relay nodes, so template exports carry a
/// non-trivial member list.
pub fn demo_selection() -> (NetworkDocument, ComponentDescriptor) {
    let mut network = NetworkDocument::new();

    let relay_a = NetworkNode::new("Relay A".to_string(), (320.0, 120.0));
    let relay_b = NetworkNode::new("Relay B".to_string(), (320.0, 260.0));
    let relay_members = vec![relay_a.clone(), relay_b.clone()];
    let relay_link = Edge::new(relay_a.id, relay_b.id);

    let gateway_id = network.add_node(NetworkNode::new("Gateway".to_string(), (140.0, 190.0)));
    let relay_a_id = network.add_node(relay_a);
    let relay_b_id = network.add_node(relay_b);
    let storage_id = network.add_node(NetworkNode::new("Storage".to_string(), (520.0, 190.0)));

    let _ = network.add_edge(gateway_id, relay_a_id);
    let _ = network.add_edge(gateway_id, relay_b_id);
    let _ = network.add_edge(relay_a_id, relay_b_id);
    let _ = network.add_edge(relay_a_id, storage_id);
    let _ = network.add_edge(relay_b_id, storage_id);

    let mut component = ComponentDescriptor::new("Relay Pair".to_string(), 2);
    component.nodes = relay_members;
    component.edges = vec![relay_link];

    (network, component)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_selection_is_consistent() {
        let (network, component) = demo_selection();

        assert_eq!(network.nodes.len(), 4);
        assert_eq!(network.edges.len(), 5);
        assert_eq!(component.nodes.len(), 2);
        // The component's members really are network nodes.
        for node in &component.nodes {
            assert!(network.nodes.contains_key(&node.id));
        }
    }
}
