//! Terminal output for templist.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing records to stdout and diagnostics to stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use templist::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.record("{}");
//! ui.warning("Repository unreachable");
//! assert_eq!(ui.records(), ["{}"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, TemplistTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a status message. Hidden in quiet mode.
    fn message(&mut self, msg: &str);

    /// Display extra detail. Only shown in verbose mode.
    fn detail(&mut self, msg: &str);

    /// Emit one output record. Always shown.
    fn record(&mut self, text: &str);

    /// Display a warning message. Hidden in quiet mode.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);
}
