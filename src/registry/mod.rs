//! Template registry for templist.
//!
//! This module turns a repository list into templates:
//! - [`fetch`] downloads repository indexes over HTTP
//! - [`remote`] decodes an index into template descriptions
//! - [`template`] defines the published and normalized template records
//! - [`catalog`] collects templates across every repository
//!
//! # Example
//!
//! ```no_run
//! use templist::registry::{collect_templates, HttpFetcher};
//! use std::path::Path;
//!
//! let fetcher = HttpFetcher::new().unwrap();
//! let catalog = collect_templates(Path::new("repository_list.json"), &fetcher).unwrap();
//!
//! for template in &catalog.templates {
//!     println!("{}", template.to_pretty_json().unwrap());
//! }
//! ```

pub mod catalog;
pub mod fetch;
pub mod remote;
pub mod template;

// Re-exports
pub use catalog::{collect_templates, Catalog, RepositoryFailure};
pub use fetch::{FetchError, HttpFetcher, DEFAULT_TIMEOUT};
pub use remote::{parse_descriptions, RepositoryFetcher};
pub use template::{Template, TemplateDescription};
