//! Repository list loading.
//!
//! Reads the repository list file and decodes it into
//! [`RepositoryEntry`] values, keeping file order.

use crate::config::schema::RepositoryEntry;
use crate::error::{Result, TemplistError};
use std::fs;
use std::path::Path;

/// Repository list used when no path is given on the command line.
pub const DEFAULT_REPOSITORY_LIST: &str = "resources/repository_list.json";

/// Load the repository list at `path`.
///
/// Entries are returned in file order; duplicates are kept.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigReadError` if the file exists but can't be read.
/// Returns `ConfigParseError` if the content is not a JSON array of repositories.
pub fn load_repositories(path: &Path) -> Result<Vec<RepositoryEntry>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TemplistError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TemplistError::ConfigReadError {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let repositories = parse_repositories(&content, path)?;
    tracing::debug!(
        "Loaded {} repositories from {}",
        repositories.len(),
        path.display()
    );
    Ok(repositories)
}

/// Parse repository list content.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_repositories(content: &str, source_path: &Path) -> Result<Vec<RepositoryEntry>> {
    serde_json::from_str(content).map_err(|e| TemplistError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
