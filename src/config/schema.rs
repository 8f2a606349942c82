//! Repository list schema.

use serde::{Deserialize, Serialize};

/// One template repository named in the repository list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Human-readable description of the repository.
    #[serde(default)]
    pub description: String,

    /// URL of the repository's template index.
    pub url: String,
}

impl RepositoryEntry {
    /// Create a repository entry.
    pub fn new(description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            url: url.into(),
        }
    }
}
