//! Dependency suggestion domain model.

use serde::{Deserialize, Serialize};

/// A single package suggestion returned by the suggestion service.
///
/// Ephemeral: produced per query, replaced wholesale by the next query's
/// results, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySuggestion {
    /// PyPI package name.
    pub package: String,
    /// Brief justification for suggesting the package.
    pub reason: String,
}
