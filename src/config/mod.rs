//! Step Configuration Module
//!
//! Provides the configuration record exchanged with the host workflow
//! framework and the path arithmetic for resolving step locations.
//!
//! # Structure
//!
//! - [`model`]: Configuration record and mapping/JSON conversions
//! - [`paths`]: Location resolution against the workflow root

pub mod model;
pub mod paths;

pub use model::{ConfigError, StepConfig};
pub use paths::{relative_location, resolve_location};
