//! Template collection across repositories.
//!
//! Reads the repository list, asks each repository for its templates in
//! list order, and gathers the results into a [`Catalog`]. A repository
//! that fails contributes no templates; only a repository list failure
//! aborts collection. Failures are returned to the caller to report.

use std::path::Path;

use super::fetch::FetchError;
use super::remote::RepositoryFetcher;
use super::template::Template;
use crate::config::{load_repositories, RepositoryEntry};
use crate::error::Result;

/// A repository that contributed no templates, and why.
#[derive(Debug)]
pub struct RepositoryFailure {
    pub repository: RepositoryEntry,
    pub error: FetchError,
}

/// Templates gathered from every configured repository.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Number of repositories queried.
    pub repository_count: usize,
    /// Templates in repository order, then index order.
    pub templates: Vec<Template>,
    /// Repositories whose fetch or decode failed.
    pub failures: Vec<RepositoryFailure>,
}

impl Catalog {
    /// Collect templates from `repositories`, one fetch each, in order.
    pub fn collect(repositories: &[RepositoryEntry], fetcher: &dyn RepositoryFetcher) -> Self {
        let mut catalog = Self {
            repository_count: repositories.len(),
            ..Self::default()
        };

        for repository in repositories {
            match fetcher.fetch_descriptions(repository) {
                Ok(descriptions) => {
                    catalog
                        .templates
                        .extend(descriptions.into_iter().map(Template::from));
                }
                Err(error) => {
                    tracing::debug!(
                        "Failed to load templates from {}: {}",
                        repository.url,
                        error
                    );
                    catalog.failures.push(RepositoryFailure {
                        repository: repository.clone(),
                        error,
                    });
                }
            }
        }

        catalog
    }
}

/// Load the repository list at `path` and collect every template.
///
/// # Errors
///
/// Returns the repository list error if the file can't be loaded. No
/// repository is contacted in that case.
pub fn collect_templates(path: &Path, fetcher: &dyn RepositoryFetcher) -> Result<Catalog> {
    let repositories = load_repositories(path)?;
    Ok(Catalog::collect(&repositories, fetcher))
}
