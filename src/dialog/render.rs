//! egui rendering for the export dialog window.
//!
//! The widgets route every edit through the dialog's explicit commands, so
//! this layer stays a thin shell over the core state machine and the host
//! never wires widget events itself.

use super::{ConfirmOutcome, ExportDialog, ExportMode};
use eframe::egui;

/// What the dialog reported back to the host after a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// A payload was handed to the download sink and the dialog closed.
    Exported {
        /// Name of the delivered artifact.
        filename: String,
    },
    /// Serialization failed; the dialog stays open for retry or cancel.
    ExportFailed {
        /// Human-readable failure description.
        reason: String,
    },
    /// The user dismissed the dialog without exporting.
    Cancelled,
}

impl ExportDialog {
    /// Draws the dialog when open and processes its widget events.
    ///
    /// Returns an event for the host's status surface when an export attempt
    /// finished or the dialog closed this frame; draws nothing while closed.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogEvent> {
        if !self.is_open() {
            return None;
        }

        let mut event = None;
        egui::Window::new("Export Selection As")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_width(self.preferred_content_width());

                let mut mode = self.mode();
                ui.radio_value(&mut mode, ExportMode::Network, "Network");
                ui.radio_value(&mut mode, ExportMode::Template, "Template Component");
                if mode != self.mode() {
                    self.set_mode(mode);
                }

                ui.separator();
                self.draw_template_fields(ui);

                if let Some(error) = self.last_error() {
                    let error = error.to_string();
                    ui.colored_label(egui::Color32::RED, error);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Export").clicked() {
                        event = self.handle_confirm();
                    }
                    if ui.button("Cancel").clicked() && self.cancel().is_ok() {
                        event = Some(DialogEvent::Cancelled);
                    }
                });

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) && self.cancel().is_ok() {
                    event = Some(DialogEvent::Cancelled);
                }
            });

        event
    }

    /// The name field and color select, disabled while network mode is
    /// active, with indicators from the last rejected confirm.
    fn draw_template_fields(&mut self, ui: &mut egui::Ui) {
        let enabled = !self.is_network_mode();
        let errors = self.last_validation().unwrap_or_default();

        ui.label("Name");
        let mut name = self.name_input().to_string();
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut name).desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.on_name_changed(&name);
        }
        if enabled && errors.name_required {
            ui.colored_label(egui::Color32::RED, "Name is required");
        }

        ui.label("Color");
        let colors: Vec<egui::Color32> = self.palette().iter().collect();
        let selected_text = match self.color_input() {
            Some(index) => format!("Color {}", index),
            None => "Select a color".to_string(),
        };
        ui.add_enabled_ui(enabled, |ui| {
            egui::ComboBox::from_id_source("export_color_select")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (index, color) in colors.iter().enumerate() {
                        let swatch =
                            egui::RichText::new(format!("■ Color {}", index)).color(*color);
                        if ui
                            .selectable_label(self.color_input() == Some(index), swatch)
                            .clicked()
                        {
                            self.on_color_changed(index);
                        }
                    }
                });
        });
        if enabled && errors.color_required {
            ui.colored_label(egui::Color32::RED, "Color is required");
        }
    }

    fn handle_confirm(&mut self) -> Option<DialogEvent> {
        match self.confirm() {
            Ok(ConfirmOutcome::Exported(mode)) => Some(DialogEvent::Exported {
                filename: mode.filename(),
            }),
            // Field indicators were set; the dialog stays open.
            Ok(ConfirmOutcome::Rejected(_)) => None,
            Err(err) => Some(DialogEvent::ExportFailed {
                reason: err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::MemorySink;
    use crate::palette::ColorPalette;
    use crate::types::{ComponentDescriptor, NetworkDocument};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Run a single headless egui frame with the provided input events.
    fn run_frame(events: Vec<egui::Event>, mut f: impl FnMut(&egui::Context)) {
        let mut raw = egui::RawInput::default();
        raw.screen_rect = Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(1200.0, 800.0),
        ));
        raw.events = events;

        let ctx = egui::Context::default();
        let _ = ctx.run(raw, |ctx| {
            ctx.set_visuals(egui::Visuals::dark());
            f(ctx);
        });
    }

    fn open_dialog() -> ExportDialog {
        let mut dialog = ExportDialog::new(ColorPalette::default(), Box::new(MemorySink::new()));
        let component = Rc::new(RefCell::new(ComponentDescriptor::new("Box".to_string(), 1)));
        let network = Rc::new(RefCell::new(NetworkDocument::new()));
        dialog
            .open(component, network, false)
            .expect("open should succeed");
        dialog
    }

    #[test]
    fn show_draws_nothing_while_closed() {
        let mut dialog = ExportDialog::new(ColorPalette::default(), Box::new(MemorySink::new()));

        let mut event = None;
        run_frame(Vec::new(), |ctx| {
            event = dialog.show(ctx);
        });

        assert_eq!(event, None);
        assert!(!dialog.is_open());
    }

    #[test]
    fn open_dialog_survives_a_frame() {
        let mut dialog = open_dialog();

        let mut event = None;
        run_frame(Vec::new(), |ctx| {
            event = dialog.show(ctx);
        });

        assert_eq!(event, None);
        assert!(dialog.is_open());
    }

    #[test]
    fn escape_key_cancels_the_open_dialog() {
        let mut dialog = open_dialog();

        let mut event = None;
        run_frame(
            vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            |ctx| {
                event = dialog.show(ctx);
            },
        );

        assert_eq!(event, Some(DialogEvent::Cancelled));
        assert!(!dialog.is_open());
    }
}
