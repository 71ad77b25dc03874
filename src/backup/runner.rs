//! Backup orchestration.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::filter::ProjectFilter;
use super::seams::{MirrorTarget, ProjectSource, RepoTransport};
use super::summary::BackupSummary;
use crate::error::{MirrorError, Result};
use crate::gitlab::GitLabProject;
use crate::gogs::CreateRepoOption;
use crate::secrets::OutputMasker;
use crate::ui::{SpinnerHandle, UserInterface};

/// Options for one backup run.
#[derive(Debug, Clone, Default)]
pub struct BackupOptions {
    /// GitLab group id or path.
    pub group: String,
    pub filter: ProjectFilter,
    /// Inspect only: no clone, no create, no push.
    pub dry_run: bool,
}

/// Result of backing up a single project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    /// Mirrored to Gogs; `created` when the repository was new.
    Mirrored { created: bool },
    /// Dry run; `would_create` when the repository does not exist yet.
    DryRun { would_create: bool },
}

/// A project selected for backup together with its Gogs repository name.
#[derive(Debug, Clone)]
pub struct PlannedBackup {
    pub project: GitLabProject,
    pub target_name: String,
}

/// Resolve the group and select the projects to back up.
///
/// Errors here are fatal for the whole run.
pub fn plan_backups(
    source: &dyn ProjectSource,
    options: &BackupOptions,
) -> Result<(String, Vec<PlannedBackup>)> {
    let group = source.group(&options.group)?;
    info!("Found GitLab group: {}", group.name);

    let projects = source.list_projects(&group.id.to_string(), options.filter.include_archived)?;
    let planned: Vec<PlannedBackup> = projects
        .into_iter()
        .filter(|p| options.filter.matches(p))
        .map(|project| PlannedBackup {
            target_name: CreateRepoOption::for_project(&project).name,
            project,
        })
        .collect();
    info!("Found {} projects to backup", planned.len());

    Ok((group.name, planned))
}

/// Mirrors every selected project of a GitLab group to Gogs, one at a time.
pub struct BackupRunner<'a> {
    source: &'a dyn ProjectSource,
    target: &'a dyn MirrorTarget,
    transport: &'a dyn RepoTransport,
    masker: OutputMasker,
    options: BackupOptions,
}

impl<'a> BackupRunner<'a> {
    pub fn new(
        source: &'a dyn ProjectSource,
        target: &'a dyn MirrorTarget,
        transport: &'a dyn RepoTransport,
        masker: OutputMasker,
        options: BackupOptions,
    ) -> Self {
        Self {
            source,
            target,
            transport,
            masker,
            options,
        }
    }

    /// Resolve the group and list the projects a run would back up.
    pub fn plan(&self) -> Result<(String, Vec<PlannedBackup>)> {
        plan_backups(self.source, &self.options)
    }

    /// Back up every planned project, continuing past per-project failures.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<BackupSummary> {
        let (group_name, planned) = self.plan()?;
        let mut summary = BackupSummary::new(&group_name, self.options.dry_run);

        ui.show_header(&format!("Backing up GitLab group {group_name}"));
        ui.message(&format!("Found {} projects to backup", planned.len()));
        if planned.is_empty() {
            ui.warning(&format!("Nothing to back up in {group_name}"));
        }

        let total = planned.len();
        let mut claimed: HashMap<String, String> = HashMap::new();

        for (idx, listed) in planned.iter().enumerate() {
            let label = format!("[{:03}/{:03}]", idx + 1, total);
            let shown = listed.project.path_with_namespace.clone();
            let mut spinner = ui.start_spinner(&format!("{label} {shown}"));

            let result = self.source.project(listed.project.id).and_then(|project| {
                info!(
                    "{} Starting backup of {}",
                    label, project.path_with_namespace
                );
                self.claim_target(&mut claimed, &project)?;
                self.backup_project(&project, spinner.as_mut(), &label, ui)
            });

            match result {
                Ok(BackupOutcome::Mirrored { created }) => {
                    info!("Successfully backed up {}", shown);
                    let note = if created { " (new repository)" } else { "" };
                    spinner.finish_success(&format!("{label} {shown}{note}"));
                    summary.record_success(shown);
                }
                Ok(BackupOutcome::DryRun { would_create }) => {
                    let action = if would_create {
                        "would create and push"
                    } else {
                        "would push"
                    };
                    spinner.finish_skipped(&format!("{label} {shown} ({action})"));
                    summary.record_skipped(shown);
                }
                Err(e) => {
                    let message = self.masker.mask(&e.to_string());
                    warn!("Failed to backup {}: {}", shown, message);
                    spinner.finish_error(&format!("{label} {shown}: {message}"));
                    summary.record_failure(shown, message);
                }
            }
        }

        summary.finish();
        info!(
            "Backup Summary: {} successful, {} failed",
            summary.successful.len(),
            summary.failed.len()
        );
        ui.show_summary(&summary);

        Ok(summary)
    }

    /// Refuse to let two projects push into the same Gogs repository.
    ///
    /// Gogs looks repositories up by lower-cased name, so `Api` and `api`
    /// are the same target.
    fn claim_target(
        &self,
        claimed: &mut HashMap<String, String>,
        project: &GitLabProject,
    ) -> Result<()> {
        let name = CreateRepoOption::for_project(project).name;
        let key = name.to_lowercase();
        if let Some(existing) = claimed.get(&key) {
            return Err(MirrorError::TargetConflict {
                repo: name,
                existing: existing.clone(),
            });
        }
        claimed.insert(key, project.path_with_namespace.clone());
        Ok(())
    }

    fn backup_project(
        &self,
        project: &GitLabProject,
        spinner: &mut dyn SpinnerHandle,
        label: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<BackupOutcome> {
        let shown = &project.path_with_namespace;
        let option = CreateRepoOption::for_project(project);
        let verbose = ui.output_mode().shows_details();

        if self.options.dry_run {
            let exists = self.target.repo_exists(&option.name)?;
            debug!("Dry run: {} exists in Gogs: {}", option.name, exists);
            return Ok(BackupOutcome::DryRun {
                would_create: !exists,
            });
        }

        let workdir = tempfile::Builder::new().prefix("gogs-mirror-").tempdir()?;
        let clone_path = workdir.path().join(format!("{}.git", option.name));

        info!("Cloning {} from GitLab...", project.name);
        spinner.set_message(&format!("{label} {shown}: cloning"));
        if verbose {
            ui.message(&format!("  cloning {}", project.path_with_namespace));
        }
        let source_url = self.source.clone_url(project)?;
        self.transport.clone_mirror(&source_url, &clone_path)?;

        let mut created = false;
        if !self.target.repo_exists(&option.name)? {
            info!("Creating repository {} in Gogs...", option.name);
            spinner.set_message(&format!("{label} {shown}: creating repository"));
            if verbose {
                ui.message(&format!("  creating {}", option.name));
            }
            self.target.create_repo(&option)?;
            created = true;
        }

        info!("Pushing {} to Gogs...", project.name);
        spinner.set_message(&format!("{label} {shown}: pushing"));
        if verbose {
            ui.message(&format!("  pushing {}", option.name));
        }
        let push_url = self.target.push_url(&option.name)?;
        self.transport.push_mirror(&clone_path, &push_url)?;

        Ok(BackupOutcome::Mirrored { created })
    }
}
