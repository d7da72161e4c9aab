//! Terminal Prompts
//!
//! dialoguer-backed implementation of the modal prompt surface, plus the
//! colored field rendering used by the CLI front end. The directory
//! chooser is a small `Select`-driven navigator: descend into a
//! subdirectory, climb to the parent, take the current directory, or
//! back out.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use log::warn;

use super::prompt::UserPrompt;
use crate::dialog::validation::FieldStatus;

/// Menu entry for taking the directory currently shown.
const CHOOSE_HERE: &str = "[ select this directory ]";

/// Menu entry for climbing to the parent directory.
const GO_UP: &str = "..";

/// Menu entry for backing out without a pick.
const CANCEL: &str = "[ cancel ]";

/// Modal prompts rendered on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the navigator's starting directory.
    ///
    /// Falls back to the current directory when the seed does not name
    /// an existing directory (first-time sessions have an empty seed).
    fn starting_directory(seed: &Path) -> PathBuf {
        if seed.as_os_str().is_empty() || !seed.is_dir() {
            return env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        }
        seed.to_path_buf()
    }

    /// Lists the subdirectories of `dir`, sorted by name.
    fn subdirectories(dir: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot list {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        dirs
    }
}

impl UserPrompt for TerminalPrompt {
    fn confirm_invalid_save(&mut self, message: &str) -> bool {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message.to_string())
            .default(false)
            .interact();

        match answer {
            Ok(confirmed) => confirmed,
            Err(e) => {
                warn!("Confirmation prompt failed, treating as 'No': {}", e);
                false
            }
        }
    }

    fn choose_directory(&mut self, start: &Path) -> Option<PathBuf> {
        let mut current = Self::starting_directory(start);

        loop {
            let subdirs = Self::subdirectories(&current);

            let mut items = vec![CHOOSE_HERE.to_string()];
            if current.parent().is_some() {
                items.push(GO_UP.to_string());
            }
            let first_subdir = items.len();
            for dir in &subdirs {
                let name = dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dir.display().to_string());
                items.push(format!("{}/", name));
            }
            items.push(CANCEL.to_string());

            let picked = Select::with_theme(&self.theme)
                .with_prompt(format!("Select Location  ({})", current.display()))
                .items(&items)
                .default(0)
                .interact();

            let index = match picked {
                Ok(index) => index,
                Err(e) => {
                    warn!("Directory prompt failed, cancelling: {}", e);
                    return None;
                }
            };

            if index == 0 {
                return Some(current);
            }
            if index == items.len() - 1 {
                return None;
            }
            if index < first_subdir {
                // The ".." entry, present only when a parent exists.
                if let Some(parent) = current.parent() {
                    current = parent.to_path_buf();
                }
                continue;
            }

            current = subdirs[index - first_subdir].clone();
        }
    }
}

/// Renders one dialog field with its validity styling.
///
/// Invalid fields get the highlighted treatment the GUI original applied
/// through its style sheet; everything else renders plain.
pub fn render_field(label: &str, value: &str, status: FieldStatus) -> String {
    let shown = if value.is_empty() { "<empty>" } else { value };
    match status {
        FieldStatus::Invalid => format!("{}: {}", label, shown.white().on_red()),
        FieldStatus::Valid => format!("{}: {}", label, shown.green()),
        FieldStatus::Unchecked => format!("{}: {}", label, shown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_starting_directory_empty_seed_falls_back() {
        let start = TerminalPrompt::starting_directory(Path::new(""));
        assert!(!start.as_os_str().is_empty());
    }

    #[test]
    fn test_starting_directory_existing_seed_is_kept() {
        let dir = tempdir().unwrap();
        let start = TerminalPrompt::starting_directory(dir.path());
        assert_eq!(start, dir.path());
    }

    #[test]
    fn test_starting_directory_missing_seed_falls_back() {
        let start = TerminalPrompt::starting_directory(Path::new("/no/such/place"));
        assert_ne!(start, Path::new("/no/such/place"));
    }

    #[test]
    fn test_subdirectories_sorted_dirs_only() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();

        let subdirs = TerminalPrompt::subdirectories(dir.path());
        assert_eq!(subdirs.len(), 2);
        assert!(subdirs[0].ends_with("alpha"));
        assert!(subdirs[1].ends_with("beta"));
    }

    #[test]
    fn test_subdirectories_unreadable_is_empty() {
        let subdirs = TerminalPrompt::subdirectories(Path::new("/no/such/place"));
        assert!(subdirs.is_empty());
    }

    #[test]
    fn test_render_field_marks_empty_value() {
        let rendered = render_field("Location", "", FieldStatus::Unchecked);
        assert!(rendered.contains("<empty>"));
    }

    #[test]
    fn test_render_field_includes_label_and_value() {
        let rendered = render_field("Identifier", "step_a", FieldStatus::Valid);
        assert!(rendered.starts_with("Identifier:"));
        assert!(rendered.contains("step_a"));
    }
}
