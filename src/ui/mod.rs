//! The demo host shell embedding the export dialog.
//!
//! Owns the network document and the current selection, keeps one reusable
//! [`ExportDialog`] instance across export cycles, and renders a read-only
//! preview of the network with the selected component's members tinted by
//! its palette color.

use crate::constants;
use crate::dialog::{DialogEvent, ExportDialog, ExportMode, OpenOutcome};
use crate::download;
use crate::examples;
use crate::palette::ColorPalette;
use crate::types::{ComponentDescriptor, NetworkDocument, NodeId};
use eframe::egui;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// The demo application: a network view with export actions.
pub struct NetworkApp {
    /// The network on display; payload candidate for network exports.
    network: Rc<RefCell<NetworkDocument>>,
    /// The current selection; payload candidate for template exports.
    component: Rc<RefCell<ComponentDescriptor>>,
    /// The reusable export dialog instance.
    export_dialog: ExportDialog,
    /// Outcome of the most recent export interaction, shown in the toolbar.
    status: Option<String>,
}

impl Default for NetworkApp {
    fn default() -> Self {
        let (network, component) = examples::demo_selection();
        Self {
            network: Rc::new(RefCell::new(network)),
            component: Rc::new(RefCell::new(component)),
            export_dialog: ExportDialog::new(ColorPalette::default(), download::platform_sink()),
            status: None,
        }
    }
}

impl eframe::App for NetworkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_preview(ui);
        });

        if let Some(event) = self.export_dialog.show(ctx) {
            self.status = Some(match event {
                DialogEvent::Exported { filename } => format!("Exported {}", filename),
                DialogEvent::ExportFailed { reason } => format!("Export failed: {}", reason),
                DialogEvent::Cancelled => "Export cancelled".to_string(),
            });
        }
    }
}

impl NetworkApp {
    /// Renders the toolbar with the export actions and the status line.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Export Selection…").clicked() {
                let opened = self.export_dialog.open(
                    Rc::clone(&self.component),
                    Rc::clone(&self.network),
                    false,
                );
                if let Err(err) = opened {
                    self.status = Some(format!("Export failed: {}", err));
                }
            }

            if ui.button("Quick Export Template").clicked() {
                self.status = Some(self.run_auto_export());
            }

            ui.separator();
            ui.label(format!("Selection: {}", self.component.borrow().label));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(status) = &self.status {
                    ui.label(status);
                }
            });
        });
    }

    /// Saves the selected component as a template without showing the dialog.
    fn run_auto_export(&mut self) -> String {
        let outcome = self.export_dialog.open(
            Rc::clone(&self.component),
            Rc::clone(&self.network),
            true,
        );
        match outcome {
            Ok(OpenOutcome::AutoExported) => {
                format!("Exported {}", ExportMode::Template.filename())
            }
            Ok(OpenOutcome::AutoExportRejected(result)) => {
                if result.name_required {
                    "Component needs a name before it can be exported".to_string()
                } else {
                    "Component needs a valid color before it can be exported".to_string()
                }
            }
            Ok(OpenOutcome::Opened) => "Export dialog opened".to_string(),
            Err(err) => format!("Export failed: {}", err),
        }
    }

    /// Paints the read-only network preview.
    fn draw_preview(&self, ui: &mut egui::Ui) {
        let network = self.network.borrow();
        let component = self.component.borrow();
        let members: HashSet<NodeId> = component.nodes.iter().map(|node| node.id).collect();
        let highlight = self
            .export_dialog
            .palette()
            .get(component.color)
            .unwrap_or(egui::Color32::GRAY);

        let origin = ui.min_rect().min;
        let painter = ui.painter();

        for edge in &network.edges {
            if let (Some(from), Some(to)) =
                (network.nodes.get(&edge.from), network.nodes.get(&edge.to))
            {
                let a = origin + egui::vec2(from.position.0, from.position.1);
                let b = origin + egui::vec2(to.position.0, to.position.1);
                painter.line_segment(
                    [a, b],
                    egui::Stroke::new(constants::PREVIEW_EDGE_WIDTH, egui::Color32::DARK_GRAY),
                );
            }
        }

        for node in network.nodes.values() {
            let center = origin + egui::vec2(node.position.0, node.position.1);
            let fill = if members.contains(&node.id) {
                highlight
            } else {
                egui::Color32::from_gray(120)
            };
            painter.circle_filled(center, constants::PREVIEW_NODE_RADIUS, fill);
            painter.text(
                center
                    + egui::vec2(
                        0.0,
                        constants::PREVIEW_NODE_RADIUS + constants::PREVIEW_LABEL_OFFSET,
                    ),
                egui::Align2::CENTER_CENTER,
                &node.label,
                egui::FontId::proportional(12.0),
                ui.visuals().text_color(),
            );
        }
    }
}
