//! Dialog Front-End Module
//!
//! Terminal presentation for the configure dialog.
//!
//! # Structure
//!
//! - [`prompt`]: The modal prompt surface the dialog core blocks on
//! - [`terminal`]: dialoguer-backed prompts and colored field rendering

pub mod prompt;
pub mod terminal;

pub use prompt::UserPrompt;
pub use terminal::TerminalPrompt;
