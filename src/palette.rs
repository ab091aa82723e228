//! The fixed component color palette.

use crate::constants;
use egui::Color32;

/// Ordered sequence of the colors a template component may be tagged with.
///
/// Supplied once when the export dialog is constructed and never mutated;
/// component color fields are indices into it.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    colors: Vec<Color32>,
}

impl ColorPalette {
    /// Creates a palette from an ordered list of colors.
    pub fn new(colors: Vec<Color32>) -> Self {
        Self { colors }
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`, if the index is in range.
    pub fn get(&self, index: usize) -> Option<Color32> {
        self.colors.get(index).copied()
    }

    /// True iff `index` addresses a palette entry.
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.colors.len()
    }

    /// Iterates the palette colors in order.
    pub fn iter(&self) -> impl Iterator<Item = Color32> + '_ {
        self.colors.iter().copied()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new(
            constants::COMPONENT_COLORS
                .iter()
                .map(|&(r, g, b)| Color32::from_rgb(r, g, b))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_constants() {
        let palette = ColorPalette::default();
        assert_eq!(palette.len(), constants::COMPONENT_COLORS.len());
        assert!(!palette.is_empty());
    }

    #[test]
    fn index_bounds() {
        let palette = ColorPalette::new(vec![Color32::RED, Color32::GREEN, Color32::BLUE]);
        assert!(palette.contains_index(0));
        assert!(palette.contains_index(2));
        assert!(!palette.contains_index(3));
        assert_eq!(palette.get(1), Some(Color32::GREEN));
        assert_eq!(palette.get(3), None);
    }
}
