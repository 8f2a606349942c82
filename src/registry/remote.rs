//! Remote template loading from repository indexes.
//!
//! A repository index is a JSON array of [`TemplateDescription`] objects
//! served over HTTP.

use super::fetch::{FetchError, HttpFetcher};
use super::template::TemplateDescription;
use crate::config::RepositoryEntry;

/// Source of template descriptions for a single repository.
///
/// Implemented by [`HttpFetcher`]; tests substitute their own.
pub trait RepositoryFetcher {
    /// Fetch every template description the repository advertises.
    ///
    /// Called once per repository per run.
    fn fetch_descriptions(
        &self,
        repository: &RepositoryEntry,
    ) -> Result<Vec<TemplateDescription>, FetchError>;
}

impl RepositoryFetcher for HttpFetcher {
    fn fetch_descriptions(
        &self,
        repository: &RepositoryEntry,
    ) -> Result<Vec<TemplateDescription>, FetchError> {
        let body = self.fetch(&repository.url)?;
        let descriptions = parse_descriptions(&repository.url, &body)?;
        tracing::debug!(
            "Fetched {} template descriptions from {}",
            descriptions.len(),
            repository.url
        );
        Ok(descriptions)
    }
}

/// Decode a repository index body.
pub fn parse_descriptions(url: &str, content: &str) -> Result<Vec<TemplateDescription>, FetchError> {
    serde_json::from_str(content).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
