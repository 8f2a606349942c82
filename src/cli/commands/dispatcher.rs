//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::registry::HttpFetcher;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    repositories: PathBuf,
    timeout: Duration,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given repository list.
    pub fn new(repositories: PathBuf, timeout: Duration) -> Self {
        Self {
            repositories,
            timeout,
        }
    }

    /// Get the repository list path.
    pub fn repositories(&self) -> &Path {
        &self.repositories
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match cli.command.unwrap_or(Commands::Templates) {
            Commands::Templates => {
                let fetcher = HttpFetcher::with_timeout(self.timeout)?;
                let cmd = super::templates::TemplatesCommand::new(
                    &self.repositories,
                    Box::new(fetcher),
                );
                cmd.execute(ui)
            }
            Commands::Repositories => {
                let cmd = super::repositories::RepositoriesCommand::new(&self.repositories);
                cmd.execute(ui)
            }
        }
    }
}
