//! Run command implementation.
//!
//! The `gogs-mirror run` command mirrors every selected project of the
//! GitLab group to Gogs.

use tracing::info;

use crate::backup::{BackupOptions, BackupRunner, GitTransport};
use crate::cli::args::RunArgs;
use crate::config::{RawSettings, Settings};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::services::{connect_gitlab, connect_gogs};

/// The run command implementation.
pub struct RunCommand {
    settings: RawSettings,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(settings: RawSettings, args: RunArgs) -> Self {
        Self { settings, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = Settings::resolve(self.settings.clone())?;
        settings.log_summary();

        let gitlab = connect_gitlab(&settings)?;
        let gogs = connect_gogs(&settings)?;
        let transport = GitTransport::new(settings.masker());

        let options = BackupOptions {
            group: settings.gitlab_group.clone(),
            filter: self.args.selection.filter(),
            dry_run: self.args.dry_run,
        };
        let runner = BackupRunner::new(&gitlab, &gogs, &transport, settings.masker(), options);
        let summary = runner.run(ui)?;

        if let Some(path) = &self.args.report {
            summary.write_report(path)?;
            info!("Wrote report to {}", path.display());
            ui.message(&format!("Report written to {}", path.display()));
        }

        if summary.is_success() {
            if self.args.dry_run {
                ui.success("Dry run complete, nothing was changed");
            } else {
                ui.success("Backup process completed successfully!");
            }
            Ok(CommandResult::success())
        } else {
            ui.error(&format!(
                "{} of {} repositories failed to back up",
                summary.failed.len(),
                summary.total()
            ));
            Ok(CommandResult::failure(summary.exit_code()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::services::testing::*;
    use super::*;
    use crate::cli::args::SelectionArgs;
    use crate::error::MirrorError;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use reqwest::Url;
    use std::path::Path;
    use std::process::Command as Git;
    use tempfile::TempDir;

    fn git(args: &[&str], cwd: &Path) {
        let output = Git::new("git").args(args).current_dir(cwd).output().unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// A bare repository with one commit on `main`.
    fn seeded_bare_repo(temp: &TempDir) -> std::path::PathBuf {
        let bare = temp.path().join("api.git");
        let work = temp.path().join("work");
        git(&["init", "--bare", "--initial-branch=main", bare.to_str().unwrap()], temp.path());
        git(&["clone", bare.to_str().unwrap(), work.to_str().unwrap()], temp.path());
        git(&["config", "user.name", "Test"], &work);
        git(&["config", "user.email", "test@test.com"], &work);
        std::fs::write(work.join("README.md"), "api").unwrap();
        git(&["add", "."], &work);
        git(&["commit", "-m", "Initial commit"], &work);
        git(&["push", "origin", "HEAD:main"], &work);
        bare
    }

    fn dry_run() -> RunArgs {
        RunArgs {
            dry_run: true,
            ..Default::default()
        }
    }

    #[test]
    fn missing_settings_fail_before_any_request() {
        let cmd = RunCommand::new(RawSettings::default(), RunArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, MirrorError::MissingConfig { ref vars } if vars.len() == 5));
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn dry_run_inspects_every_project() {
        let server = MockServer::start();
        mock_gitlab(&server, &[(1, "api"), (2, "web")]);
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/repos/alice/api");
            then.status(200).json_body(serde_json::json!({"name": "api"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/repos/alice/web");
            then.status(404);
        });
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/v1/user/repos");
            then.status(201);
        });

        let cmd = RunCommand::new(settings_for(&server, None), dry_run());
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.spinner_skips().len(), 2);
        assert!(ui.spinner_skips()[1].contains("would create"));
        assert!(ui.has_success("Dry run complete"));
        create.assert_calls(0);
    }

    #[test]
    fn gogs_errors_fail_the_run_with_exit_code_one() {
        let server = MockServer::start();
        mock_gitlab(&server, &[(1, "api")]);
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/repos/alice/api");
            then.status(500);
        });

        let cmd = RunCommand::new(settings_for(&server, None), dry_run());
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("1 of 1 repositories failed"));
        assert_eq!(ui.summaries()[0].failed[0].name, "acme/api");
    }

    #[test]
    fn selection_limits_projects() {
        let server = MockServer::start();
        mock_gitlab(&server, &[(1, "api"), (2, "web")]);
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/repos/alice/web");
            then.status(404);
        });

        let args = RunArgs {
            dry_run: true,
            selection: SelectionArgs {
                only: vec!["web".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        let cmd = RunCommand::new(settings_for(&server, None), args);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.spinners().len(), 1);
        assert!(ui.spinners()[0].contains("acme/web"));
    }

    #[test]
    fn writes_json_report() {
        let server = MockServer::start();
        mock_gitlab(&server, &[(1, "api")]);
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/repos/alice/api");
            then.status(404);
        });
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("out/report.json");

        let args = RunArgs {
            dry_run: true,
            report: Some(report.clone()),
            ..Default::default()
        };
        let cmd = RunCommand::new(settings_for(&server, None), args);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(json["group"], "Acme");
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["skipped"][0], "acme/api");
        assert!(ui.has_message("Report written"));
    }

    #[test]
    fn missing_org_aborts_before_backup() {
        let server = MockServer::start();
        mock_gitlab(&server, &[(1, "api")]);
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/orgs/backups");
            then.status(403);
        });

        let cmd = RunCommand::new(settings_for(&server, Some("backups")), dry_run());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, MirrorError::OrgAccessDenied { .. }));
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn creates_repo_then_records_masked_push_failure() {
        let temp = TempDir::new().unwrap();
        let bare = seeded_bare_repo(&temp);
        let mut record = project_json(1, "api");
        record["http_url_to_repo"] = Url::from_file_path(&bare).unwrap().to_string().into();

        let server = MockServer::start();
        mock_gitlab_projects(&server, &[record]);
        let exists = server.mock(|when, then| {
            when.method(GET).path("/api/v1/repos/alice/api");
            then.status(404);
        });
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/user/repos")
                .header("Authorization", "token gogs-test")
                .json_body(serde_json::json!({
                    "name": "api",
                    "description": "api service",
                    "private": true
                }));
            then.status(201).json_body(serde_json::json!({"name": "api"}));
        });

        let cmd = RunCommand::new(settings_for(&server, None), RunArgs::default());
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        exists.assert_calls(1);
        create.assert_calls(1);
        assert_eq!(result.exit_code, 1);
        let summary = &ui.summaries()[0];
        assert!(summary.successful.is_empty());
        assert_eq!(summary.failed[0].name, "acme/api");
        assert!(summary.failed[0].error.contains("push --mirror"));
        assert!(!summary.failed[0].error.contains("gogs-test"));
        assert!(!summary.failed[0].error.contains("glpat-test"));
    }
}
