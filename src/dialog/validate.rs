//! Pure validation of the template fields.

use super::ExportMode;
use crate::palette::ColorPalette;

/// Per-field validation outcome for one input snapshot.
///
/// Both flags false means the snapshot is exportable in the given mode; each
/// set flag names the field the render layer should mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// The template name is empty or blank.
    pub name_required: bool,
    /// The color input does not resolve to a palette index.
    pub color_required: bool,
}

impl ValidationResult {
    /// True iff no field failed.
    pub fn is_valid(self) -> bool {
        !self.name_required && !self.color_required
    }
}

/// Validates an input snapshot for the given mode.
///
/// Network exports have no field dependency and always validate, regardless
/// of the field contents. Template exports require a non-blank name and a
/// color index inside the palette. Pure function of its arguments.
pub fn validate(
    mode: ExportMode,
    name_input: &str,
    color_input: Option<usize>,
    palette: &ColorPalette,
) -> ValidationResult {
    if mode.is_network() {
        return ValidationResult::default();
    }
    ValidationResult {
        name_required: name_input.trim().is_empty(),
        color_required: !matches!(color_input, Some(index) if palette.contains_index(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    fn palette_of(len: usize) -> ColorPalette {
        ColorPalette::new(vec![Color32::WHITE; len])
    }

    #[test]
    fn network_mode_accepts_anything() {
        let palette = palette_of(3);

        assert!(validate(ExportMode::Network, "", None, &palette).is_valid());
        assert!(validate(ExportMode::Network, "   ", Some(99), &palette).is_valid());
        assert!(validate(ExportMode::Network, "Box", Some(0), &palette).is_valid());
    }

    #[test]
    fn template_mode_requires_a_name() {
        let palette = palette_of(3);

        let result = validate(ExportMode::Template, "", Some(0), &palette);
        assert!(result.name_required);
        assert!(!result.color_required);
        assert!(!result.is_valid());

        let blank = validate(ExportMode::Template, " \t ", Some(0), &palette);
        assert!(blank.name_required);
    }

    #[test]
    fn template_mode_requires_a_palette_color() {
        let palette = palette_of(3);

        let missing = validate(ExportMode::Template, "Box", None, &palette);
        assert!(missing.color_required);
        assert!(!missing.name_required);

        let out_of_range = validate(ExportMode::Template, "Box", Some(5), &palette);
        assert!(out_of_range.color_required);

        let last = validate(ExportMode::Template, "Box", Some(2), &palette);
        assert!(last.is_valid());
    }

    #[test]
    fn template_mode_reports_both_failing_fields() {
        let palette = palette_of(3);

        let result = validate(ExportMode::Template, "", Some(7), &palette);
        assert!(result.name_required);
        assert!(result.color_required);
    }
}
