//! templist - List project templates advertised by template repositories.
//!
//! A local repository list names template repositories. templist fetches
//! each repository's JSON index, renames the advertised fields into a
//! stable [`Template`](registry::Template) shape, and prints the result.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Repository list loading
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Index fetching, template records, and collection
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use templist::registry::{Template, TemplateDescription};
//!
//! let description = TemplateDescription {
//!     display_name: "Node Template".to_string(),
//!     location: "https://example.com/node-template".to_string(),
//!     ..Default::default()
//! };
//! let template = Template::from(description);
//! assert_eq!(template.label, "Node Template");
//! assert_eq!(template.url, "https://example.com/node-template");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod ui;

pub use error::{Result, TemplistError};
