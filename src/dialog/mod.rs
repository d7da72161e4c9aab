//! Configure Dialog Module
//!
//! The dialog session for configuring a single workflow step.
//!
//! # Structure
//!
//! - [`session`]: `ConfigureDialog` state machine and lifecycle
//! - [`validation`]: Field validity rules and status markers

pub mod session;
pub mod validation;

pub use session::{ConfigureDialog, DialogError, DialogState, INVALID_CONFIG_WARNING};
pub use validation::FieldStatus;
