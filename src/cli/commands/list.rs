//! List command implementation.
//!
//! The `gogs-mirror list` command shows which projects a run would back up
//! and the Gogs repository each one lands in.

use serde::Serialize;

use crate::backup::{plan_backups, BackupOptions, PlannedBackup};
use crate::cli::args::ListArgs;
use crate::config::{RawSettings, Settings};
use crate::error::Result;
use crate::gogs::RepoOwner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::services::connect_gitlab;

/// The list command implementation.
pub struct ListCommand {
    settings: RawSettings,
    args: ListArgs,
}

/// One row of `list --json`.
#[derive(Debug, Serialize)]
struct ListedProject<'a> {
    project: &'a str,
    target: String,
    visibility: Option<&'a str>,
    archived: bool,
}

impl<'a> ListedProject<'a> {
    fn new(planned: &'a PlannedBackup, owner: &RepoOwner) -> Self {
        Self {
            project: &planned.project.path_with_namespace,
            target: format!("{}/{}", owner.name(), planned.target_name),
            visibility: planned.project.visibility.as_deref(),
            archived: planned.project.archived,
        }
    }
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(settings: RawSettings, args: ListArgs) -> Self {
        Self { settings, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn render_json(planned: &[PlannedBackup], owner: &RepoOwner) -> Result<String> {
        let rows: Vec<ListedProject<'_>> = planned
            .iter()
            .map(|p| ListedProject::new(p, owner))
            .collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = Settings::resolve(self.settings.clone())?;
        let gitlab = connect_gitlab(&settings)?;
        let owner = settings.owner();

        let options = BackupOptions {
            group: settings.gitlab_group.clone(),
            filter: self.args.selection.filter(),
            dry_run: true,
        };
        let (group_name, planned) = plan_backups(&gitlab, &options)?;

        if self.args.json {
            println!("{}", Self::render_json(&planned, &owner)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("GitLab group {group_name}"));
        for item in &planned {
            let marker = if item.project.archived {
                " (archived)"
            } else {
                ""
            };
            ui.message(&format!(
                "  {} -> {}/{}{}",
                item.project.path_with_namespace,
                owner.name(),
                item.target_name,
                marker
            ));
        }
        ui.message(&format!("\n{} projects", planned.len()));

        Ok(CommandResult::success())
    }
}
