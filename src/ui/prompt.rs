//! Modal Prompt Surface
//!
//! The two blocking interactions the dialog needs from its front end:
//! a yes/no confirmation before force-saving an invalid configuration,
//! and a directory chooser for the location browse action. The dialog
//! core stays toolkit-free by calling through this trait.

use std::path::{Path, PathBuf};

/// Blocking user prompts presented on behalf of the dialog.
///
/// Implementations suspend the caller until the user responds; the
/// dialog itself is already modal, so plain synchronous returns suffice.
pub trait UserPrompt {
    /// Asks whether an invalid configuration should be saved anyway.
    ///
    /// Returns true only on an explicit "yes".
    fn confirm_invalid_save(&mut self, message: &str) -> bool;

    /// Opens a directory chooser seeded at `start`.
    ///
    /// Returns the chosen directory, or `None` if the user backed out.
    fn choose_directory(&mut self, start: &Path) -> Option<PathBuf>;
}
