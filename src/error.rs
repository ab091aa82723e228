//! Error types for the export dialog.

use thiserror::Error;

/// Errors surfaced by the export dialog.
///
/// Field validation failures are not errors; they come back as a
/// rejection outcome so the dialog can stay open with field indicators.
#[derive(Debug, Error)]
pub enum ExportError {
    /// `confirm` or `cancel` was invoked while the dialog is closed. This is
    /// a host integration bug, reported immediately instead of being
    /// silently ignored.
    #[error("export dialog is not open")]
    NotOpen,

    /// The selected source object could not be serialized to JSON.
    #[error("failed to serialize export payload: {0}")]
    Serialization(#[from] serde_json::Error),
}
