//! Step Configuration Record
//!
//! The configuration a step exchanges with the host workflow framework:
//! a two-key mapping holding the step identifier and the location of the
//! step's resource directory, relative to the workflow root.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "identifier": "source_1",
//!   "Location": "data/source"
//! }
//! ```
//!
//! The `Location` key keeps its historical capital-L spelling; workflows
//! saved by older tool versions depend on it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mapping key for the step identifier.
pub const KEY_IDENTIFIER: &str = "identifier";

/// Mapping key for the step location.
pub const KEY_LOCATION: &str = "Location";

/// Errors raised when converting configuration data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key was absent from a configuration mapping.
    #[error("configuration mapping is missing required key '{0}'")]
    MissingKey(&'static str),

    /// The configuration could not be read from or written as JSON.
    #[error("configuration serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration for a single workflow step.
///
/// Produced by the configure dialog when the user accepts, and consumed
/// by the host to persist the step into the workflow document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StepConfig {
    /// Identifier naming this step uniquely within the workflow
    pub identifier: String,

    /// Directory holding step resources, relative to the workflow root
    #[serde(rename = "Location")]
    pub location: String,
}

impl StepConfig {
    /// Creates a configuration from identifier and location values.
    pub fn new(identifier: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            location: location.into(),
        }
    }

    /// Builds a configuration from the host's mapping shape.
    ///
    /// Both keys are required; extra keys are ignored.
    pub fn from_mapping(mapping: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let identifier = mapping
            .get(KEY_IDENTIFIER)
            .ok_or(ConfigError::MissingKey(KEY_IDENTIFIER))?;
        let location = mapping
            .get(KEY_LOCATION)
            .ok_or(ConfigError::MissingKey(KEY_LOCATION))?;

        Ok(Self::new(identifier, location))
    }

    /// Converts the configuration into the host's mapping shape.
    pub fn to_mapping(&self) -> HashMap<String, String> {
        let mut mapping = HashMap::new();
        mapping.insert(KEY_IDENTIFIER.to_string(), self.identifier.clone());
        mapping.insert(KEY_LOCATION.to_string(), self.location.clone());
        mapping
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
