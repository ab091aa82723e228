//! The export dialog core.
//!
//! One reusable, modal dialog that exports the current selection either as a
//! full network document or as a reusable template component. The dialog is a
//! plain stateful struct the host constructs once and drives across many
//! open/export/close cycles; the payload candidates are supplied fresh at
//! each `open`.
//!
//! Responsibilities are composed linearly:
//! - mode selection ([`ExportMode`], [`ExportDialog::set_mode`]),
//! - conditional field validation ([`validate`], template mode only),
//! - serialization of the chosen object into a named payload
//!   ([`build_payload`]) handed to the [`DownloadSink`].
//!
//! Everything runs synchronously on the UI thread; the sink is the only
//! asynchronous boundary and is fire-and-forget.

mod export;
mod render;
mod validate;

pub use export::{build_payload, ExportPayload};
pub use render::DialogEvent;
pub use validate::{validate, ValidationResult};

use crate::constants;
use crate::download::DownloadSink;
use crate::error::ExportError;
use crate::palette::ColorPalette;
use crate::types::{ComponentDescriptor, NetworkDocument};
use std::cell::RefCell;
use std::rc::Rc;

/// Which kind of artifact a confirmed export produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// Export the whole network document.
    #[default]
    Network,
    /// Export the selected component as a reusable template.
    Template,
}

impl ExportMode {
    /// Filename stem for artifacts of this mode.
    pub fn token(self) -> &'static str {
        match self {
            ExportMode::Network => "network",
            ExportMode::Template => "template",
        }
    }

    /// Full artifact filename.
    ///
    /// Derived from the mode alone, never from the exported object's name,
    /// so repeated exports land on the same filename unless the caller
    /// renames the output.
    pub fn filename(self) -> String {
        format!("{}.json", self.token())
    }

    /// True iff this is the network mode.
    pub fn is_network(self) -> bool {
        matches!(self, ExportMode::Network)
    }
}

/// References to the payload candidates for one open/export/close cycle.
///
/// The component is shared with the host and mutated through the dialog's
/// commands; the network is only ever borrowed immutably.
struct ExportSession {
    component: Rc<RefCell<ComponentDescriptor>>,
    network: Rc<RefCell<NetworkDocument>>,
}

/// Result of opening the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The dialog is open and waiting for user input.
    Opened,
    /// Auto-export ran and delivered the template payload; the dialog is
    /// closed again.
    AutoExported,
    /// Auto-export ran but the component failed validation; nothing was
    /// delivered and the dialog is closed again.
    AutoExportRejected(ValidationResult),
}

/// Result of a confirm attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The payload was delivered to the download sink and the dialog closed.
    Exported(ExportMode),
    /// Validation failed; the dialog stays open with field indicators set.
    Rejected(ValidationResult),
}

/// The export dialog state machine.
///
/// States are Closed and Open; `open` enters Open (or runs the auto-export
/// bypass), `confirm` and `cancel` return to Closed. Every transition to
/// Closed resets the mode to [`ExportMode::Network`], clears the auto-export
/// flag and drops the session references, so a reopened dialog always starts
/// from the same defaults.
///
/// Calling `confirm` or `cancel` while Closed is a caller contract violation
/// and fails fast with [`ExportError::NotOpen`]; the field-edit commands are
/// plain edit events and are ignored while Closed.
pub struct ExportDialog {
    palette: ColorPalette,
    sink: Box<dyn DownloadSink>,
    session: Option<ExportSession>,
    mode: ExportMode,
    name_input: String,
    color_input: Option<usize>,
    auto_export: bool,
    last_validation: Option<ValidationResult>,
    last_error: Option<String>,
}

impl ExportDialog {
    /// Creates a closed dialog over the given palette and download sink.
    pub fn new(palette: ColorPalette, sink: Box<dyn DownloadSink>) -> Self {
        Self {
            palette,
            sink,
            session: None,
            mode: ExportMode::default(),
            name_input: String::new(),
            color_input: None,
            auto_export: false,
            last_validation: None,
            last_error: None,
        }
    }

    /// True while the dialog is open and waiting for user input.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The currently active export mode.
    pub fn mode(&self) -> ExportMode {
        self.mode
    }

    /// True iff the network mode is active; template fields are disabled and
    /// ignored while this holds.
    pub fn is_network_mode(&self) -> bool {
        self.mode.is_network()
    }

    /// Switches the active export mode.
    ///
    /// Subsequent validation and serialization follow the new mode. Stale
    /// field indicators from an earlier rejected confirm are cleared.
    pub fn set_mode(&mut self, mode: ExportMode) {
        if mode != self.mode {
            self.mode = mode;
            self.last_validation = None;
        }
    }

    /// The palette the color input selects from.
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Current contents of the template name field.
    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    /// Currently selected color index, if any.
    pub fn color_input(&self) -> Option<usize> {
        self.color_input
    }

    /// True while an auto-export open is in flight; cleared whenever the
    /// dialog closes.
    pub fn auto_export(&self) -> bool {
        self.auto_export
    }

    /// Field indicators from the most recent rejected confirm, if any.
    pub fn last_validation(&self) -> Option<ValidationResult> {
        self.last_validation
    }

    /// Failure notice from the most recent serialization error, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Preferred width of the dialog's content area, in points.
    ///
    /// A layout hint only; the host shell applies it however its toolkit
    /// requires.
    pub fn preferred_content_width(&self) -> f32 {
        constants::EXPORT_DIALOG_CONTENT_WIDTH
    }

    /// Opens the dialog over fresh payload candidates.
    ///
    /// The name/color field snapshot is initialized from the component's
    /// current values. The mode is left as-is; closing is the only reset
    /// point, so an interactive open after any close starts in network mode.
    /// Opening while already open restarts initialization with the new
    /// references and discards unsaved field edits.
    ///
    /// With `auto_export` set, the dialog switches to template mode, attempts
    /// a single `confirm` synchronously without showing any surface, and ends
    /// Closed regardless of the outcome.
    pub fn open(
        &mut self,
        component: Rc<RefCell<ComponentDescriptor>>,
        network: Rc<RefCell<NetworkDocument>>,
        auto_export: bool,
    ) -> Result<OpenOutcome, ExportError> {
        {
            let component = component.borrow();
            self.name_input = component.label.clone();
            self.color_input = Some(component.color);
        }
        self.session = Some(ExportSession { component, network });
        self.auto_export = auto_export;
        self.last_validation = None;
        self.last_error = None;

        if !auto_export {
            return Ok(OpenOutcome::Opened);
        }

        // Auto-export is the quick-save path for the selected component:
        // one confirm attempt in template mode, then closed either way.
        self.mode = ExportMode::Template;
        match self.confirm() {
            Ok(ConfirmOutcome::Exported(_)) => Ok(OpenOutcome::AutoExported),
            Ok(ConfirmOutcome::Rejected(result)) => {
                self.reset();
                Ok(OpenOutcome::AutoExportRejected(result))
            }
            Err(err) => {
                self.reset();
                Err(err)
            }
        }
    }

    /// Validates the current input snapshot against the current mode.
    pub fn validation(&self) -> ValidationResult {
        validate(self.mode, &self.name_input, self.color_input, &self.palette)
    }

    /// True iff the dialog is open and a confirm would pass validation.
    ///
    /// Exposed so a host can enable or disable its own confirm control.
    pub fn is_valid(&self) -> bool {
        self.is_open() && self.validation().is_valid()
    }

    /// Records a user edit of the template name field.
    ///
    /// Updates the field snapshot and writes through to the shared component
    /// descriptor. Ignored while closed or in network mode, where the field
    /// is disabled.
    pub fn on_name_changed(&mut self, text: &str) {
        let Some(session) = &self.session else {
            return;
        };
        if self.mode.is_network() {
            return;
        }
        self.name_input = text.to_string();
        session.component.borrow_mut().label = text.to_string();
        self.last_validation = None;
    }

    /// Records a user selection of a palette color.
    ///
    /// Updates the field snapshot and writes through to the shared component
    /// descriptor. Ignored while closed or in network mode. An out-of-range
    /// index is stored as-is and caught by validation.
    pub fn on_color_changed(&mut self, index: usize) {
        let Some(session) = &self.session else {
            return;
        };
        if self.mode.is_network() {
            return;
        }
        self.color_input = Some(index);
        session.component.borrow_mut().color = index;
        self.last_validation = None;
    }

    /// Attempts the export for the current mode and input snapshot.
    ///
    /// On a validation failure the dialog stays open, field indicators are
    /// set and `Rejected` is returned. On success the payload goes to the
    /// download sink exactly once and the dialog closes. A serialization
    /// failure leaves the dialog open with a failure notice and is returned
    /// as an error.
    pub fn confirm(&mut self) -> Result<ConfirmOutcome, ExportError> {
        let session = self.session.as_ref().ok_or(ExportError::NotOpen)?;

        let result = validate(self.mode, &self.name_input, self.color_input, &self.palette);
        if !result.is_valid() {
            self.last_validation = Some(result);
            return Ok(ConfirmOutcome::Rejected(result));
        }

        let mode = self.mode;
        let payload = match mode {
            ExportMode::Network => build_payload(mode, &*session.network.borrow()),
            ExportMode::Template => build_payload(mode, &*session.component.borrow()),
        };
        let payload = match payload {
            Ok(payload) => payload,
            Err(err) => {
                self.last_error = Some(err.to_string());
                return Err(err);
            }
        };

        self.sink.deliver(&payload.filename, &payload.content);
        self.reset();
        Ok(ConfirmOutcome::Exported(mode))
    }

    /// Dismisses the dialog without exporting.
    pub fn cancel(&mut self) -> Result<(), ExportError> {
        if self.session.is_none() {
            return Err(ExportError::NotOpen);
        }
        self.reset();
        Ok(())
    }

    /// Every transition to Closed lands here: drop the session references
    /// and restore the defaults the next open relies on.
    fn reset(&mut self) {
        self.session = None;
        self.mode = ExportMode::Network;
        self.name_input.clear();
        self.color_input = None;
        self.auto_export = false;
        self.last_validation = None;
        self.last_error = None;
    }
}
