//! Repository list loading.
//!
//! The repository list is a local JSON file naming every template
//! repository to query:
//!
//! ```json
//! [
//!   { "description": "Standard templates", "url": "https://example.com/index.json" }
//! ]
//! ```
//!
//! - Schema definitions in [`schema`]
//! - File loading and decoding in [`loader`]
//!
//! # Example
//!
//! ```
//! use templist::config::load_repositories;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("repository_list.json");
//! fs::write(&path, r#"[{"description":"Standard","url":"https://example.com/index.json"}]"#).unwrap();
//!
//! let repositories = load_repositories(&path).unwrap();
//! assert_eq!(repositories[0].url, "https://example.com/index.json");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_repositories, parse_repositories, DEFAULT_REPOSITORY_LIST};
pub use schema::RepositoryEntry;
