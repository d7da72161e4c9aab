//! Host Framework Interface
//!
//! The narrow capability the dialog needs from the workflow framework:
//! counting how many steps currently use a candidate identifier. The host
//! implements [`IdentifierOccurrence`] and injects it before the first
//! validation pass.

use std::collections::HashMap;

/// Capability for querying identifier usage across the workflow.
///
/// Implemented by the host framework; the dialog never enumerates steps
/// itself, it only asks for occurrence counts.
pub trait IdentifierOccurrence {
    /// Returns how many steps in the workflow use `identifier`.
    fn occurrences(&self, identifier: &str) -> usize;
}

/// Adapter exposing a plain closure as an [`IdentifierOccurrence`].
pub struct OccurrenceFn<F>(pub F);

impl<F> IdentifierOccurrence for OccurrenceFn<F>
where
    F: Fn(&str) -> usize,
{
    fn occurrences(&self, identifier: &str) -> usize {
        (self.0)(identifier)
    }
}

/// In-memory identifier registry.
///
/// Reference implementation of [`IdentifierOccurrence`] used by the CLI
/// front end and tests; a real host backs this with its workflow document.
#[derive(Debug, Clone, Default)]
pub struct WorkflowIndex {
    counts: HashMap<String, usize>,
}

impl WorkflowIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from a list of step identifiers.
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new();
        for identifier in identifiers {
            index.register(identifier);
        }
        index
    }

    /// Records one step using `identifier`.
    pub fn register(&mut self, identifier: impl Into<String>) {
        *self.counts.entry(identifier.into()).or_insert(0) += 1;
    }

    /// Removes one step using `identifier`, if any is recorded.
    pub fn unregister(&mut self, identifier: &str) {
        if let Some(count) = self.counts.get_mut(identifier) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(identifier);
            }
        }
    }

    /// Returns the number of distinct identifiers registered.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no identifiers are registered.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl IdentifierOccurrence for WorkflowIndex {
    fn occurrences(&self, identifier: &str) -> usize {
        self.counts.get(identifier).copied().unwrap_or(0)
    }
}
