//! Building the downloadable export payload.

use super::ExportMode;
use crate::error::ExportError;
use serde::Serialize;

/// A named, downloadable artifact ready for the download sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Name the artifact downloads under.
    pub filename: String,
    /// Compact UTF-8 JSON of the exported object.
    pub content: String,
}

/// Serializes `source` into the payload for `mode`.
///
/// The filename comes from the mode token alone ("network.json" or
/// "template.json"), never from the object's own name. The content is the
/// full object graph reachable from `source`, encoded as compact JSON; a
/// failure (unsupported values, cyclic structure) maps to
/// [`ExportError::Serialization`] and is not retried.
///
/// Callers are expected to have validated the current input snapshot first;
/// this function does not re-check it.
pub fn build_payload<T: Serialize>(mode: ExportMode, source: &T) -> Result<ExportPayload, ExportError> {
    let content = serde_json::to_string(source)?;
    Ok(ExportPayload {
        filename: mode.filename(),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComponentDescriptor, NetworkDocument, NetworkNode};
    use serde_json::{json, Value};

    #[test]
    fn filename_follows_the_mode() {
        assert_eq!(ExportMode::Network.filename(), "network.json");
        assert_eq!(ExportMode::Template.filename(), "template.json");

        let payload = build_payload(ExportMode::Template, &json!({})).unwrap();
        assert_eq!(payload.filename, "template.json");
    }

    #[test]
    fn payload_content_round_trips() {
        let source = json!({"a": 1, "b": [2, 3]});

        let payload = build_payload(ExportMode::Network, &source).unwrap();

        assert_eq!(payload.filename, "network.json");
        assert_eq!(payload.content, r#"{"a":1,"b":[2,3]}"#);
        let restored: Value = serde_json::from_str(&payload.content).unwrap();
        assert_eq!(restored, source);
    }

    #[test]
    fn network_document_payload_parses_back() {
        let mut network = NetworkDocument::new();
        let a = network.add_node(NetworkNode::new("A".to_string(), (0.0, 0.0)));
        let b = network.add_node(NetworkNode::new("B".to_string(), (100.0, 50.0)));
        network.add_edge(a, b).unwrap();

        let payload = build_payload(ExportMode::Network, &network).unwrap();
        let restored: NetworkDocument = serde_json::from_str(&payload.content).unwrap();

        assert_eq!(restored.nodes.len(), 2);
        assert_eq!(restored.edges.len(), 1);
    }

    #[test]
    fn component_payload_carries_name_and_color() {
        let component = ComponentDescriptor::new("Box".to_string(), 2);

        let payload = build_payload(ExportMode::Template, &component).unwrap();
        let value: Value = serde_json::from_str(&payload.content).unwrap();

        assert_eq!(value["label"], "Box");
        assert_eq!(value["color"], 2);
    }
}
