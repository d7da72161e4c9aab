//! Configure Dialog Session
//!
//! The state machine behind the step configuration dialog: two text
//! fields, a workflow root, the host's identifier-occurrence capability,
//! and the accept/reject lifecycle. Front ends render the fields and
//! forward edits; all rules live here.
//!
//! A session is constructed once per edit, fed the workflow location and
//! (optionally) a previously saved configuration, and discarded after the
//! user accepts or cancels.

use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use super::validation::{identifier_is_valid, location_is_valid, FieldStatus};
use crate::config::paths::relative_location;
use crate::config::StepConfig;
use crate::host::IdentifierOccurrence;
use crate::ui::prompt::UserPrompt;

/// Warning shown before an invalid configuration is force-saved.
pub const INVALID_CONFIG_WARNING: &str = "This configuration is invalid. \
    Unpredictable behaviour may result if you choose 'Yes', are you sure \
    you want to save this configuration?";

/// Lifecycle state of a dialog session.
///
/// `Accepted` and `Rejected` are terminal; a new session is created for
/// the next edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Open,
    Accepted,
    Rejected,
}

/// Contract violations surfaced when the host drives the dialog wrong.
///
/// These are programming errors, not user-facing conditions: the host
/// must inject the workflow location and the occurrence capability
/// before the first validation pass.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("workflow location was not set before validation")]
    WorkflowLocationNotSet,

    #[error("identifier occurrence capability was not set before validation")]
    OccurrenceCounterNotSet,
}

/// Configuration dialog for a single workflow step.
pub struct ConfigureDialog {
    workflow_location: Option<PathBuf>,
    counter: Option<Box<dyn IdentifierOccurrence>>,

    identifier: String,
    location: String,

    // Last committed values. The identifier baseline exempts the step's
    // own saved name from the collision check; the location baseline
    // seeds the directory browser.
    previous_identifier: String,
    previous_location: String,

    identifier_status: FieldStatus,
    location_status: FieldStatus,
    state: DialogState,
}

impl Default for ConfigureDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigureDialog {
    /// Creates an open, unvalidated dialog with empty fields.
    pub fn new() -> Self {
        Self {
            workflow_location: None,
            counter: None,
            identifier: String::new(),
            location: String::new(),
            previous_identifier: String::new(),
            previous_location: String::new(),
            identifier_status: FieldStatus::Unchecked,
            location_status: FieldStatus::Unchecked,
            state: DialogState::Open,
        }
    }

    /// Records the workflow root all location checks resolve against.
    ///
    /// No validation happens here; the path is only used once a
    /// validation pass runs.
    pub fn set_workflow_location(&mut self, location: impl Into<PathBuf>) {
        self.workflow_location = Some(location.into());
    }

    /// Injects the host's identifier-occurrence capability.
    pub fn set_identifier_occurrence(&mut self, counter: Box<dyn IdentifierOccurrence>) {
        self.counter = Some(counter);
    }

    /// Populates both fields from a saved configuration.
    ///
    /// The loaded values also become the baseline, so the freshly-loaded
    /// identifier reads as this step's own name rather than a collision.
    /// Field statuses reset to unchecked until the next validation pass.
    pub fn set_config(&mut self, config: &StepConfig) {
        self.previous_identifier = config.identifier.clone();
        self.previous_location = config.location.clone();
        self.identifier = config.identifier.clone();
        self.location = config.location.clone();
        self.identifier_status = FieldStatus::Unchecked;
        self.location_status = FieldStatus::Unchecked;
    }

    /// Builds a configuration from the current field values.
    ///
    /// Also commits the current values as the new baseline, so a later
    /// validation pass treats the saved identifier as self rather than
    /// as a duplicate.
    pub fn config(&mut self) -> StepConfig {
        self.previous_identifier = self.identifier.clone();
        self.previous_location = self.location.clone();
        StepConfig::new(&self.identifier, &self.location)
    }

    /// Current identifier field text.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Current location field text.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Validity marker of the identifier field.
    pub fn identifier_status(&self) -> FieldStatus {
        self.identifier_status
    }

    /// Validity marker of the location field.
    pub fn location_status(&self) -> FieldStatus {
        self.location_status
    }

    /// Lifecycle state of the session.
    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Returns true while the session is still editable.
    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Applies an identifier edit and re-validates both fields.
    pub fn change_identifier(&mut self, text: impl Into<String>) -> Result<bool, DialogError> {
        self.identifier = text.into();
        self.validate()
    }

    /// Applies a location edit and re-validates both fields.
    pub fn change_location(&mut self, text: impl Into<String>) -> Result<bool, DialogError> {
        self.location = text.into();
        self.validate()
    }

    /// Re-validates both fields independently and updates their markers.
    ///
    /// Returns the overall validity. Fails if the host has not yet
    /// supplied the workflow location or the occurrence capability.
    pub fn validate(&mut self) -> Result<bool, DialogError> {
        let workflow_root = self
            .workflow_location
            .as_deref()
            .ok_or(DialogError::WorkflowLocationNotSet)?;
        let counter = self
            .counter
            .as_deref()
            .ok_or(DialogError::OccurrenceCounterNotSet)?;

        let valid_identifier =
            identifier_is_valid(counter, &self.identifier, &self.previous_identifier);
        self.identifier_status = FieldStatus::from_valid(valid_identifier);

        let valid_location = location_is_valid(workflow_root, &self.location);
        self.location_status = FieldStatus::from_valid(valid_location);

        Ok(valid_identifier && valid_location)
    }

    /// Attempts to close the dialog in the accepted state.
    ///
    /// A valid configuration accepts immediately. An invalid one accepts
    /// only after the user confirms the force-save warning; declining
    /// leaves the session open for further editing. Returns whether the
    /// dialog was accepted.
    pub fn accept(&mut self, prompt: &mut dyn UserPrompt) -> Result<bool, DialogError> {
        let valid = self.validate()?;

        if !valid {
            warn!("Configuration is invalid, asking for confirmation");
            if !prompt.confirm_invalid_save(INVALID_CONFIG_WARNING) {
                info!("Invalid configuration not saved, dialog stays open");
                return Ok(false);
            }
            warn!("Saving invalid configuration on user confirmation");
        }

        self.state = DialogState::Accepted;
        Ok(true)
    }

    /// Closes the dialog in the rejected state. No side effects.
    pub fn reject(&mut self) {
        self.state = DialogState::Rejected;
    }

    /// Runs the directory browse action.
    ///
    /// The chooser is seeded at the previously picked location. A pick
    /// becomes the new location baseline, and the location field is set
    /// to the pick expressed relative to the workflow root, followed by
    /// a re-validation pass. Returns whether a directory was picked.
    pub fn browse_location(&mut self, prompt: &mut dyn UserPrompt) -> Result<bool, DialogError> {
        let workflow_root = self
            .workflow_location
            .clone()
            .ok_or(DialogError::WorkflowLocationNotSet)?;

        let seed = PathBuf::from(&self.previous_location);
        let Some(picked) = prompt.choose_directory(&seed) else {
            return Ok(false);
        };

        info!("Directory picked: {}", picked.display());
        self.previous_location = picked.display().to_string();
        self.location = relative_location(&picked, &workflow_root)
            .display()
            .to_string();
        self.validate()?;

        Ok(true)
    }

    /// Workflow root currently in effect, if set.
    pub fn workflow_location(&self) -> Option<&Path> {
        self.workflow_location.as_deref()
    }
}
