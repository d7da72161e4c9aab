//! Field Validation Rules
//!
//! The two validity rules the configure dialog applies, kept as free
//! functions so they can be tested without a dialog session:
//!
//! - identifier uniqueness across the workflow (with a self-reference
//!   exemption for the step's own saved identifier)
//! - location existence under the workflow root

use std::path::Path;

use log::debug;

use crate::config::paths::resolve_location;
use crate::host::IdentifierOccurrence;

/// Validity marker for one dialog field.
///
/// Stands in for the original tool's style-sheet toggle: `Invalid` fields
/// are rendered highlighted, everything else renders plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// No validation pass has run over this field yet
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

impl FieldStatus {
    /// Returns true if the last validation pass flagged this field.
    pub fn is_invalid(self) -> bool {
        self == FieldStatus::Invalid
    }

    /// Converts a rule outcome into a status.
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }
}

/// Checks identifier uniqueness against the host's occurrence count.
///
/// Valid when no step uses the identifier, or when exactly one does and
/// the text matches the identifier this dialog last saved. Re-saving a
/// step under its own name is never a collision.
pub fn identifier_is_valid(
    counter: &dyn IdentifierOccurrence,
    identifier: &str,
    previous_identifier: &str,
) -> bool {
    let count = counter.occurrences(identifier);
    debug!("Identifier '{}' occurs {} time(s)", identifier, count);

    count == 0 || (count == 1 && identifier == previous_identifier)
}

/// Checks that a location resolves to an existing directory.
pub fn location_is_valid(workflow_root: &Path, location: &str) -> bool {
    let resolved = resolve_location(workflow_root, location);
    let valid = resolved.is_dir();
    debug!("Location '{}' -> {:?} (dir: {})", location, resolved, valid);
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::WorkflowIndex;
    use tempfile::tempdir;

    #[test]
    fn test_identifier_unused_is_valid() {
        let index = WorkflowIndex::new();
        assert!(identifier_is_valid(&index, "fresh", ""));
    }

    #[test]
    fn test_identifier_self_reference_is_valid() {
        let index = WorkflowIndex::from_identifiers(["mine"]);
        assert!(identifier_is_valid(&index, "mine", "mine"));
    }

    #[test]
    fn test_identifier_collision_is_invalid() {
        let index = WorkflowIndex::from_identifiers(["taken"]);
        assert!(!identifier_is_valid(&index, "taken", "other"));
    }

    #[test]
    fn test_identifier_double_collision_is_invalid() {
        // Two other steps already share the name; even a matching
        // baseline cannot make it unique.
        let index = WorkflowIndex::from_identifiers(["dup", "dup"]);
        assert!(!identifier_is_valid(&index, "dup", "dup"));
    }

    #[test]
    fn test_location_existing_directory_is_valid() {
        let root = tempdir().unwrap();
        std::fs::create_dir(root.path().join("data")).unwrap();

        assert!(location_is_valid(root.path(), "data"));
    }

    #[test]
    fn test_location_missing_directory_is_invalid() {
        let root = tempdir().unwrap();
        assert!(!location_is_valid(root.path(), "missing"));
    }

    #[test]
    fn test_location_file_is_invalid() {
        let root = tempdir().unwrap();
        std::fs::write(root.path().join("notes.txt"), "x").unwrap();

        assert!(!location_is_valid(root.path(), "notes.txt"));
    }

    #[test]
    fn test_location_empty_points_at_root() {
        let root = tempdir().unwrap();
        assert!(location_is_valid(root.path(), ""));
    }

    #[test]
    fn test_field_status_from_valid() {
        assert_eq!(FieldStatus::from_valid(true), FieldStatus::Valid);
        assert_eq!(FieldStatus::from_valid(false), FieldStatus::Invalid);
        assert!(FieldStatus::Invalid.is_invalid());
        assert!(!FieldStatus::Unchecked.is_invalid());
    }
}
