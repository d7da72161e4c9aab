//! StepDialog - Step Configuration Dialog
//!
//! The configuration dialog for a single step of a visual workflow
//! authoring tool. A step is configured by two values: an identifier,
//! unique across the workflow, and a resource directory stored relative
//! to the workflow root. The dialog validates both on every edit and on
//! accept, and exchanges a plain two-key configuration mapping with the
//! host framework.
//!
//! # Architecture
//!
//! The library is organized into four main modules:
//!
//! - [`config`]: Configuration record and location path resolution
//! - [`dialog`]: The dialog session state machine and validation rules
//! - [`host`]: The identifier-occurrence capability the host injects
//! - [`ui`]: Modal prompt surface and terminal front end
//!
//! # Example
//!
//! ```rust,no_run
//! use stepdialog::dialog::ConfigureDialog;
//! use stepdialog::host::WorkflowIndex;
//! use stepdialog::ui::TerminalPrompt;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut dialog = ConfigureDialog::new();
//!     dialog.set_workflow_location("/workflows/demo");
//!     dialog.set_identifier_occurrence(Box::new(WorkflowIndex::from_identifiers([
//!         "existing_step",
//!     ])));
//!
//!     dialog.change_identifier("source_1")?;
//!     dialog.change_location("data/source")?;
//!
//!     let mut prompt = TerminalPrompt::new();
//!     if dialog.accept(&mut prompt)? {
//!         let config = dialog.config();
//!         println!("{}", config.to_json()?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dialog;
pub mod host;
pub mod ui;

// Re-export commonly used types
pub use config::{ConfigError, StepConfig};
pub use dialog::{ConfigureDialog, DialogError, DialogState, FieldStatus};
pub use host::{IdentifierOccurrence, WorkflowIndex};
pub use ui::UserPrompt;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "StepDialog";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "StepDialog");
    }

    #[test]
    fn test_module_exports_step_config() {
        let config = StepConfig::new("test", "data");
        assert_eq!(config.identifier, "test");
        assert_eq!(config.location, "data");
    }

    #[test]
    fn test_module_exports_dialog() {
        let dialog = ConfigureDialog::new();
        assert_eq!(dialog.state(), DialogState::Open);
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        for part in parts {
            assert!(part.parse::<u32>().is_ok(), "Version components should be numeric");
        }
    }
}
