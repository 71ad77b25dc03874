//! Backup results and JSON reports.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;

/// A project that could not be backed up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedBackup {
    /// Project path with namespace.
    pub name: String,
    /// Masked error message.
    pub error: String,
}

/// What happened to every project of one run.
#[derive(Debug, Clone, Serialize)]
pub struct BackupSummary {
    /// GitLab group that was backed up.
    pub group: String,
    pub dry_run: bool,
    pub successful: Vec<String>,
    pub failed: Vec<FailedBackup>,
    /// Projects only inspected because of `--dry-run`.
    pub skipped: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl BackupSummary {
    /// Start an empty summary.
    pub fn new(group: impl Into<String>, dry_run: bool) -> Self {
        Self {
            group: group.into(),
            dry_run,
            successful: Vec::new(),
            failed: Vec::new(),
            skipped: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn record_success(&mut self, name: impl Into<String>) {
        self.successful.push(name.into());
    }

    pub fn record_failure(&mut self, name: impl Into<String>, error: impl Into<String>) {
        self.failed.push(FailedBackup {
            name: name.into(),
            error: error.into(),
        });
    }

    pub fn record_skipped(&mut self, name: impl Into<String>) {
        self.skipped.push(name.into());
    }

    /// Stamp the end time.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Number of projects seen.
    pub fn total(&self) -> usize {
        self.successful.len() + self.failed.len() + self.skipped.len()
    }

    /// True when nothing failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Process exit code for this run.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Wall time between start and finish, if finished.
    pub fn duration(&self) -> Option<Duration> {
        let finished = self.finished_at?;
        (finished - self.started_at).to_std().ok()
    }

    /// Write the summary as pretty JSON.
    pub fn write_report(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Format a duration as e.g. `850ms`, `12.3s` or `4m 05s`.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis}ms")
    } else if millis < 60_000 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}
