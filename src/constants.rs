//! Shared application-wide constants.
//! Centralizes tweakable values used across the dialog and the preview.

/// Fixed, ordered palette of template component colors as RGB triples.
/// Component color fields are indices into this list.
pub const COMPONENT_COLORS: [(u8, u8, u8); 8] = [
    (0x00, 0x74, 0xE8), // blue
    (0x00, 0xB3, 0x8A), // green
    (0xF5, 0xA6, 0x23), // amber
    (0xE0, 0x3E, 0x52), // red
    (0x8A, 0x54, 0xD6), // purple
    (0x00, 0xA8, 0xC4), // teal
    (0xE8, 0x6A, 0x2E), // orange
    (0x5C, 0x6B, 0x7A), // slate
];

/// Preferred width of the export dialog's content area, in points.
pub const EXPORT_DIALOG_CONTENT_WIDTH: f32 = 200.0;

// Network preview
/// Radius of node circles in the preview (screen pixels).
pub const PREVIEW_NODE_RADIUS: f32 = 14.0;
/// Stroke width for preview edges (screen pixels).
pub const PREVIEW_EDGE_WIDTH: f32 = 1.5;
/// Vertical gap between a node circle and its label.
pub const PREVIEW_LABEL_OFFSET: f32 = 10.0;
