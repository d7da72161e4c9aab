//! Step Location Resolution
//!
//! Path arithmetic tying a step's location field to the workflow root.
//! Locations are stored relative to the root so a workflow directory can
//! be moved or shared without breaking its steps.

use std::path::{Component, Path, PathBuf};

/// Resolves a location field against the workflow root.
///
/// An absolute location replaces the root entirely, matching platform
/// join semantics.
pub fn resolve_location(workflow_root: &Path, location: &str) -> PathBuf {
    workflow_root.join(location)
}

/// Expresses `target` relative to `workflow_root`.
///
/// Walks off the shared component prefix, climbing with `..` for each
/// remaining root component. Returns `.` when the paths are identical.
/// Both paths are expected in the same form (absolute, as produced by a
/// directory chooser, against an absolute root).
pub fn relative_location(target: &Path, workflow_root: &Path) -> PathBuf {
    let target_parts: Vec<Component> = target.components().collect();
    let root_parts: Vec<Component> = workflow_root.components().collect();

    let shared = target_parts
        .iter()
        .zip(root_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..root_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[shared..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }

    relative
}
