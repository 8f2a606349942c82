//! Repositories command implementation.
//!
//! The `templist repositories` command shows the repository list without
//! contacting any repository.

use std::path::{Path, PathBuf};

use crate::config::load_repositories;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The repositories command implementation.
pub struct RepositoriesCommand {
    repositories: PathBuf,
}

impl RepositoriesCommand {
    /// Create a new repositories command.
    pub fn new(repositories: &Path) -> Self {
        Self {
            repositories: repositories.to_path_buf(),
        }
    }
}

impl Command for RepositoriesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = match load_repositories(&self.repositories) {
            Ok(entries) => entries,
            Err(e) if e.is_config_error() => {
                ui.error(&format!("Error reading repositories: {}", e));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        ui.message(&format!("Repositories in {}:", self.repositories.display()));
        for entry in &entries {
            if entry.description.is_empty() {
                ui.record(&entry.url);
            } else {
                ui.record(&format!("{} ({})", entry.description, entry.url));
            }
        }

        Ok(CommandResult::success())
    }
}
