//! Templates command implementation.
//!
//! The `templist templates` command queries every configured repository
//! and prints each template as a tab-indented JSON object.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::registry::{collect_templates, RepositoryFetcher};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The templates command implementation.
pub struct TemplatesCommand {
    repositories: PathBuf,
    fetcher: Box<dyn RepositoryFetcher>,
}

impl TemplatesCommand {
    /// Create a new templates command.
    pub fn new(repositories: &Path, fetcher: Box<dyn RepositoryFetcher>) -> Self {
        Self {
            repositories: repositories.to_path_buf(),
            fetcher,
        }
    }

    /// Get the repository list path.
    pub fn repositories(&self) -> &Path {
        &self.repositories
    }
}

impl Command for TemplatesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = match collect_templates(&self.repositories, self.fetcher.as_ref()) {
            Ok(c) => c,
            Err(e) if e.is_config_error() => {
                ui.error(&format!("Error reading templates: {}", e));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        ui.message("Templates available:");
        for template in &catalog.templates {
            ui.record(&template.to_pretty_json()?);
        }

        for failure in &catalog.failures {
            ui.warning(&format!(
                "Skipped repository {}: {}",
                failure.repository.url, failure.error
            ));
        }

        ui.detail(&format!(
            "{} templates from {} repositories ({} failed)",
            catalog.templates.len(),
            catalog.repository_count,
            catalog.failures.len()
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepositoryEntry;
    use crate::registry::{FetchError, HttpFetcher, TemplateDescription};
    use crate::ui::{MockUI, OutputMode};
    use httpmock::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    struct StaticFetcher;

    impl RepositoryFetcher for StaticFetcher {
        fn fetch_descriptions(
            &self,
            repository: &RepositoryEntry,
        ) -> std::result::Result<Vec<TemplateDescription>, FetchError> {
            if repository.url.contains("down") {
                return Err(FetchError::Status {
                    url: repository.url.clone(),
                    status: 500,
                });
            }
            Ok(vec![TemplateDescription {
                display_name: format!("from {}", repository.description),
                ..Default::default()
            }])
        }
    }

    fn write_list(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repository_list.json");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn templates_command_creation() {
        let cmd = TemplatesCommand::new(Path::new("repos.json"), Box::new(StaticFetcher));
        assert_eq!(cmd.repositories(), Path::new("repos.json"));
    }

    #[test]
    fn prints_one_record_per_template() {
        let (_temp, path) = write_list(
            r#"[{"description":"one","url":"https://a"},{"description":"two","url":"https://b"}]"#,
        );
        let cmd = TemplatesCommand::new(&path, Box::new(StaticFetcher));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Templates available:"));
        assert_eq!(ui.records().len(), 2);
        assert!(ui.records()[0].contains("\"label\": \"from one\""));
        assert!(ui.records()[1].contains("\"label\": \"from two\""));
    }

    #[test]
    fn failed_repository_is_warned_not_fatal() {
        let (_temp, path) = write_list(
            r#"[{"description":"bad","url":"https://down"},{"description":"good","url":"https://up"}]"#,
        );
        let cmd = TemplatesCommand::new(&path, Box::new(StaticFetcher));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.records().len(), 1);
        assert!(ui.has_warning("https://down"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn missing_list_fails_without_records() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nowhere.json");
        let cmd = TemplatesCommand::new(&path, Box::new(StaticFetcher));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.records().is_empty());
        assert!(ui.has_error("Error reading templates"));
        assert!(ui.has_error("nowhere.json"));
    }

    #[test]
    fn quiet_mode_prints_only_records() {
        let (_temp, path) = write_list(
            r#"[{"description":"bad","url":"https://down"},{"description":"good","url":"https://up"}]"#,
        );
        let cmd = TemplatesCommand::new(&path, Box::new(StaticFetcher));
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages().is_empty());
        assert!(ui.warnings().is_empty());
        assert_eq!(ui.records().len(), 1);
    }

    #[test]
    fn verbose_mode_reports_totals() {
        let (_temp, path) = write_list(r#"[{"description":"one","url":"https://a"}]"#);
        let cmd = TemplatesCommand::new(&path, Box::new(StaticFetcher));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.details(), ["1 templates from 1 repositories (0 failed)"]);
    }

    #[test]
    fn renders_node_template_from_http_repository() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/index.json");
            then.status(200).body(
                r#"[{"displayName":"Node Template","description":"A Node starter","language":"nodejs","location":"https://example.com/node-template","projectType":"docker"}]"#,
            );
        });
        let (_temp, path) = write_list(&format!(
            r#"[{{"description":"Standard templates","url":"{}"}}]"#,
            server.url("/index.json")
        ));
        let cmd = TemplatesCommand::new(&path, Box::new(HttpFetcher::new().unwrap()));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.records().len(), 1);
        let value: serde_json::Value = serde_json::from_str(&ui.records()[0]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "label": "Node Template",
                "description": "A Node starter",
                "language": "nodejs",
                "url": "https://example.com/node-template",
                "projectType": "docker"
            })
        );
    }
}
