//! # Network Export
//!
//! A small network-diagram tool centered on its export dialog: the current
//! selection can be exported either as a full **network** document or as a
//! reusable **template component** with a name and a palette color.
//!
//! ## Features
//! - One reusable, modal export dialog with a network/template mode switch
//! - Template-only field validation with per-field error indicators
//! - JSON serialization of the chosen object into a named download payload
//! - Pluggable download sinks (browser download on wasm, save dialog on
//!   native, in-memory recording for tests)
//! - A demo shell with a read-only network preview and a quick template
//!   export action

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod dialog;
mod download;
mod error;
mod examples;
mod palette;
mod types;
mod ui;

// Re-export the public surface
pub use dialog::{
    build_payload, validate, ConfirmOutcome, DialogEvent, ExportDialog, ExportMode, ExportPayload,
    OpenOutcome, ValidationResult,
};
pub use download::{platform_sink, DownloadSink, MemorySink};
pub use error::ExportError;
pub use palette::ColorPalette;
pub use types::*;
use ui::NetworkApp;

/// Runs the network tool with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use network_export::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Network Export",
        options,
        Box::new(|_cc| Ok(Box::new(NetworkApp::default()))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_document_default() {
        let network = NetworkDocument::default();
        assert!(network.nodes.is_empty());
        assert!(network.edges.is_empty());
    }

    #[test]
    fn test_export_payload_building() {
        let payload =
            build_payload(ExportMode::Network, &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(payload.filename, "network.json");
        assert_eq!(payload.content, r#"{"a":1}"#);
    }
}
